use crate::game::Command;
use crate::pos::Dir;
use winit::event::VirtualKeyCode;
use winit_input_helper::WinitInputHelper;

const ARROWS: [VirtualKeyCode; 4] = [
    VirtualKeyCode::Up,
    VirtualKeyCode::Down,
    VirtualKeyCode::Left,
    VirtualKeyCode::Right,
];

/// Arrow keys steer; everything else is ignored.
pub fn command_for_key(key: VirtualKeyCode) -> Option<Command> {
    let dir = match key {
        VirtualKeyCode::Up => Dir::Up,
        VirtualKeyCode::Down => Dir::Down,
        VirtualKeyCode::Left => Dir::Left,
        VirtualKeyCode::Right => Dir::Right,
        _ => return None,
    };
    Some(Command::Turn(dir))
}

/// Commands gathered since the last `input.update` frame, quit first.
pub fn commands(input: &WinitInputHelper) -> Vec<Command> {
    let mut out = Vec::new();
    if input.close_requested() || input.destroyed() {
        out.push(Command::Quit);
    }
    out.extend(
        ARROWS
            .into_iter()
            .filter(|&key| input.key_pressed(key))
            .filter_map(command_for_key),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_turns() {
        assert_eq!(command_for_key(VirtualKeyCode::Up), Some(Command::Turn(Dir::Up)));
        assert_eq!(command_for_key(VirtualKeyCode::Down), Some(Command::Turn(Dir::Down)));
        assert_eq!(command_for_key(VirtualKeyCode::Left), Some(Command::Turn(Dir::Left)));
        assert_eq!(command_for_key(VirtualKeyCode::Right), Some(Command::Turn(Dir::Right)));
    }

    #[test]
    fn other_keys_are_ignored() {
        for key in [VirtualKeyCode::W, VirtualKeyCode::Escape, VirtualKeyCode::Space, VirtualKeyCode::P] {
            assert_eq!(command_for_key(key), None);
        }
    }

    #[test]
    fn fresh_helper_yields_nothing() {
        let input = WinitInputHelper::new();
        assert!(commands(&input).is_empty());
    }
}
