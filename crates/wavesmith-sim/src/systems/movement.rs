//! Player movement from held keys.
//!
//! Axes are independent and diagonals are not normalized, so moving
//! diagonally covers `speed * sqrt(2)` per tick.

use wavesmith_core::components::Player;
use wavesmith_core::input::InputState;

pub fn move_player(player: &mut Player, input: &InputState) {
    let (x, y) = input.axis();
    player.position.x += x * player.speed;
    player.position.y += y * player.speed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world_setup::new_player;

    #[test]
    fn moves_by_speed_per_axis() {
        let mut player = new_player();
        let input = InputState {
            up: true,
            right: true,
            ..Default::default()
        };
        move_player(&mut player, &input);
        assert_eq!(player.position.x, 303.0);
        assert_eq!(player.position.y, 197.0);
    }

    #[test]
    fn no_keys_no_movement() {
        let mut player = new_player();
        move_player(&mut player, &InputState::default());
        assert_eq!(player.position.x, 300.0);
        assert_eq!(player.position.y, 200.0);
    }
}
