use rondo_dial::control::ControlCommand;

#[derive(Debug, Clone)]
pub enum AppEvent {
    Show,
    Hide,
    Select(usize),
    Step(isize),
}

impl From<ControlCommand> for AppEvent {
    fn from(command: ControlCommand) -> Self {
        match command {
            ControlCommand::Show => AppEvent::Show,
            ControlCommand::Hide => AppEvent::Hide,
            ControlCommand::Select(index) => AppEvent::Select(index),
            ControlCommand::Next => AppEvent::Step(1),
            ControlCommand::Prev => AppEvent::Step(-1),
        }
    }
}
