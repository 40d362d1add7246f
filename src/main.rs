use bevy::prelude::*;

fn main() -> AppExit {
    s_pull::game::run()
}
