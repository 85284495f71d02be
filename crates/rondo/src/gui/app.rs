use crate::config::Config;
use crate::events::AppEvent;
use crate::gui::dial::{self, DialModel};
use crate::gui::pages::PageNavigator;
use crate::gui::theme::{self, ThemeColors};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use rondo_dial::{Frame, Generation, Point};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

type Dial = DialModel<PageNavigator>;

pub struct AppModel {
    pub dial: Rc<RefCell<Dial>>,
    pub visible: bool,
    pub title: String,
    pub drawing_area: gtk::DrawingArea,
    /// Generation the running frame clock was started for.
    scheduled: Option<Generation>,
}

#[derive(Debug)]
pub enum AppMsg {
    Show,
    Hide,
    Select(usize),
    Step(isize),
    DragBegin(Point, Duration),
    DragUpdate(f64, f64, Duration),
    DragEnd(Duration),
    DragCancel,
    Committed(usize),
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Show => AppMsg::Show,
            AppEvent::Hide => AppMsg::Hide,
            AppEvent::Select(index) => AppMsg::Select(index),
            AppEvent::Step(offset) => AppMsg::Step(offset),
        }
    }
}

fn event_time(gesture: &gtk::GestureDrag) -> Duration {
    Duration::from_millis(gesture.current_event_time() as u64)
}

fn title_for(label: Option<&str>) -> String {
    match label {
        Some(label) => format!("Rondo - {label}"),
        None => "Rondo".to_string(),
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            #[watch]
            set_title: Some(model.title.as_str()),
            #[watch]
            set_visible: model.visible,
            set_default_width: dial_size,
            add_css_class: "rondo-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    let msg = if key == gtk::gdk::Key::Escape {
                        AppMsg::Hide
                    } else if key == gtk::gdk::Key::Left {
                        AppMsg::Step(-1)
                    } else if key == gtk::gdk::Key::Right {
                        AppMsg::Step(1)
                    } else {
                        return glib::Propagation::Proceed;
                    };
                    sender.input(msg);
                    glib::Propagation::Stop
                }
            },

            #[name = "content"]
            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 12,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_content_width: dial_size,
                    set_content_height: dial_size,
                    set_halign: gtk::Align::Center,
                    add_css_class: "rondo-drawing-area",

                    add_controller = gtk::GestureDrag {
                        connect_drag_begin[sender] => move |gesture, x, y| {
                            sender.input(AppMsg::DragBegin(Point::new(x, y), event_time(gesture)));
                        },
                        connect_drag_update[sender] => move |gesture, dx, dy| {
                            sender.input(AppMsg::DragUpdate(dx, dy, event_time(gesture)));
                        },
                        connect_drag_end[sender] => move |gesture, _, _| {
                            sender.input(AppMsg::DragEnd(event_time(gesture)));
                        },
                        connect_cancel[sender] => move |_, _| {
                            sender.input(AppMsg::DragCancel);
                        },
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        theme::load_css();

        let pages = PageNavigator::new(&config.destinations);
        let stack = pages.stack().clone();
        // load_or_setup only hands out validated configs
        let mut dial = DialModel::new(&config, pages).expect("Failed to build dial from config");

        let commit_sender = sender.clone();
        dial.controller
            .on_index_committed(move |index| commit_sender.input(AppMsg::Committed(index)));

        let title = title_for(dial.label(dial.controller.selected_index()));
        let dial_size = dial.size();

        let model = AppModel {
            dial: Rc::new(RefCell::new(dial)),
            visible: true,
            title,
            drawing_area: gtk::DrawingArea::default(),
            scheduled: None,
        };

        let widgets = view_output!();
        widgets.content.prepend(&stack);

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let dial_draw = model.dial.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let center = Point::new(width as f64 / 2.0, height as f64 / 2.0);
                if let Err(e) = dial::draw(cr, &dial_draw.borrow(), center, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Show => self.visible = true,
            AppMsg::Hide => self.visible = false,
            AppMsg::Select(index) => self.dial.borrow_mut().controller.tap(index),
            AppMsg::Step(offset) => self.dial.borrow_mut().controller.step(offset),
            AppMsg::DragBegin(at, time) => {
                let center = self.center();
                self.dial.borrow_mut().press(at, center, time);
            }
            AppMsg::DragUpdate(dx, dy, time) => self.dial.borrow_mut().drag(dx, dy, time),
            AppMsg::DragEnd(time) => self.dial.borrow_mut().release(time),
            AppMsg::DragCancel => self.dial.borrow_mut().cancel(),
            AppMsg::Committed(index) => {
                self.title = title_for(self.dial.borrow().label(index));
            }
        }
        self.schedule_frames();
        self.drawing_area.queue_draw();
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        self.dial.borrow_mut().controller.dispose();
    }
}

impl AppModel {
    fn center(&self) -> Point {
        Point::new(
            self.drawing_area.width() as f64 / 2.0,
            self.drawing_area.height() as f64 / 2.0,
        )
    }

    /// Drives the current animation from the widget's frame clock. One tick
    /// callback runs per animation generation; a callback whose generation
    /// was cancelled sees a stale frame and removes itself.
    fn schedule_frames(&mut self) {
        let generation = {
            let dial = self.dial.borrow();
            if !dial.controller.is_animating() {
                self.scheduled = None;
                return;
            }
            dial.controller.generation()
        };
        if self.scheduled == Some(generation) {
            return;
        }
        self.scheduled = Some(generation);

        let dial = self.dial.clone();
        let last_frame = Cell::new(None::<i64>);
        self.drawing_area.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let dt = match last_frame.replace(Some(now)) {
                Some(previous) => {
                    Duration::from_micros(now.saturating_sub(previous).max(0) as u64)
                }
                None => dial.borrow().controller.config().frame_interval,
            };

            let frame = dial.borrow_mut().controller.advance(generation, dt);
            area.queue_draw();
            match frame {
                Frame::Running => glib::ControlFlow::Continue,
                Frame::Settled { index } => {
                    log::debug!("Dial settled on index {index}");
                    glib::ControlFlow::Break
                }
                Frame::Stale => glib::ControlFlow::Break,
            }
        });
    }
}
