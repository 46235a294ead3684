//! Headless HP/MP bars taking random hits, heals, spells and potions.
//!
//! Run with `cargo run --example action_rpg`.

use bevy::prelude::*;
use bevy::ui::widget::Text;
use bevy_stat_bar::prelude::*;
use rand::Rng;

#[derive(Resource)]
struct Bars {
    hp: Entity,
    mp: Entity,
}

fn main() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, bevy_stat_bar::plugin))
        .add_systems(Startup, setup)
        .add_systems(Update, play_turn);

    app.update();
    for _ in 0..20 {
        app.update();
    }
}

fn setup(mut commands: Commands, config: Res<StatBarConfig>) {
    let hp_settings = StatBarSettings {
        max_value: 100.0,
        whole_numbers: true,
        min_digits: 3,
        transition: Transition::ColorTint,
        ..Default::default()
    };
    let mp_settings = StatBarSettings {
        max_value: 50.0,
        whole_numbers: true,
        direction: FillDirection::RightToLeft,
        ..Default::default()
    };

    let Ok(hp) = spawn_stat_bar(&mut commands, &config, &hp_settings, None) else {
        return;
    };
    let Ok(mp) = spawn_stat_bar(&mut commands, &config, &mp_settings, None) else {
        return;
    };

    for (name, entities) in [("HP", hp), ("MP", mp)] {
        let label = commands.spawn((Text::new(""), ChildOf(entities.bar))).id();
        commands
            .entity(entities.bar)
            .stat_bar_command(StatBarCommand::SetValueLabel(Some(label)))
            .observe(move |trigger: Trigger<StatBarValueChanged>| {
                println!("{name}: {}", trigger.event().value);
            });
    }

    commands.insert_resource(Bars {
        hp: hp.bar,
        mp: mp.bar,
    });
}

fn play_turn(bars: Option<Res<Bars>>, mut commands: Commands) {
    let Some(bars) = bars else {
        return;
    };
    let mut rng = rand::rng();

    let (bar, amount) = match rng.random_range(0..4) {
        0 => (bars.hp, -10.0), // take damage
        1 => (bars.hp, 20.0),  // heal
        2 => (bars.mp, -20.0), // fireball
        _ => (bars.mp, 50.0),  // mana potion
    };
    commands
        .entity(bar)
        .stat_bar_command(StatBarCommand::AddValue(amount));
}
