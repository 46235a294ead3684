use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use bevy_stat_bar::prelude::*;

const NORMAL: Color = Color::srgb(0.0, 1.0, 0.0);
const LOW: Color = Color::srgb(1.0, 1.0, 0.0);
const CRITICAL: Color = Color::srgb(1.0, 0.0, 0.0);

#[derive(Resource, Default)]
struct Received(Vec<f32>);

fn setup_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, bevy_stat_bar::plugin))
        .init_resource::<Received>()
        .add_observer(|trigger: Trigger<StatBarValueChanged>, mut received: ResMut<Received>| {
            received.0.push(trigger.event().value);
        });
    app
}

fn spawn(app: &mut App, settings: StatBarSettings) -> StatBarEntities {
    let entities = app
        .world_mut()
        .run_system_once(move |mut commands: Commands, config: Res<StatBarConfig>| {
            spawn_stat_bar(&mut commands, &config, &settings, None)
        })
        .expect("system runs")
        .expect("settings are valid");
    app.update();
    entities
}

fn tinted_settings() -> StatBarSettings {
    StatBarSettings {
        min_value: 0.0,
        max_value: 100.0,
        transition: Transition::ColorTint,
        tints: ColorTints {
            normal: ColorTint::new(95.0, NORMAL),
            low: ColorTint::new(30.0, LOW),
            critical: ColorTint::new(10.0, CRITICAL),
        },
        ..Default::default()
    }
}

fn set_value(app: &mut App, bar: Entity, value: f32) {
    app.world_mut().stat_bar_mut(bar).unwrap().set_value(value);
    app.update();
}

fn fill_color(app: &App, fill: Entity) -> Color {
    app.world().get::<FillImage>(fill).unwrap().color
}

#[test]
fn spawned_bar_starts_full() {
    let mut app = setup_app();
    let entities = spawn(
        &mut app,
        StatBarSettings {
            max_value: 40.0,
            ..Default::default()
        },
    );

    let bar = app.world().stat_bar(entities.bar).unwrap();
    assert_eq!(bar.value(), 40.0);
    assert_eq!(bar.fill(), Some(entities.fill));
    assert_eq!(bar.references().fill_container, Some(entities.fill_area));

    let fill_box = app.world().get::<AnchorBox>(entities.fill).unwrap();
    assert_eq!(fill_box.anchor_max, Vec2::ONE);
    assert!(app.world().get::<DrivenAnchors>(entities.fill).is_some());

    let background = app.world().get::<BackgroundColor>(entities.background).unwrap();
    assert_eq!(background.0, StatBarConfig::default().background_color);
    assert!(app.world().resource::<Received>().0.is_empty());
}

#[test]
fn invalid_settings_are_rejected() {
    let mut app = setup_app();
    let result = app
        .world_mut()
        .run_system_once(|mut commands: Commands, config: Res<StatBarConfig>| {
            let settings = StatBarSettings {
                min_digits: 12,
                ..Default::default()
            };
            spawn_stat_bar(&mut commands, &config, &settings, None)
        })
        .expect("system runs");

    assert!(matches!(
        result,
        Err(StatBarError::InvalidSettings { field: "min_digits", .. })
    ));
}

#[test]
fn tint_follows_thresholds() {
    let mut app = setup_app();
    let entities = spawn(&mut app, tinted_settings());

    set_value(&mut app, entities.bar, 5.0);
    assert_eq!(fill_color(&app, entities.fill), CRITICAL);
    let background = app.world().get::<BackgroundColor>(entities.fill).unwrap();
    assert_eq!(background.0, CRITICAL);

    set_value(&mut app, entities.bar, 20.0);
    assert_eq!(fill_color(&app, entities.fill), LOW);

    set_value(&mut app, entities.bar, 50.0);
    assert_eq!(fill_color(&app, entities.fill), NORMAL);

    // Above every threshold the previous color stays.
    set_value(&mut app, entities.bar, 98.0);
    assert_eq!(fill_color(&app, entities.fill), NORMAL);
}

#[test]
fn switching_transition_mode() {
    let mut app = setup_app();
    let entities = spawn(
        &mut app,
        StatBarSettings {
            value: Some(5.0),
            transition: Transition::None,
            ..tinted_settings()
        },
    );
    let spawned = StatBarConfig::default().fill_color;
    assert_eq!(fill_color(&app, entities.fill), spawned);

    // Entering tint mode applies the tier of the current value.
    app.world_mut()
        .stat_bar_mut(entities.bar)
        .unwrap()
        .set_transition_mode(Transition::ColorTint);
    app.update();
    assert_eq!(fill_color(&app, entities.fill), CRITICAL);

    app.world_mut()
        .stat_bar_mut(entities.bar)
        .unwrap()
        .set_transition_mode(Transition::None);
    app.update();
    assert_eq!(fill_color(&app, entities.fill), StatBarConfig::default().untinted_color);
}

#[test]
fn commands_mutate_bars() {
    let mut app = setup_app();
    let entities = spawn(
        &mut app,
        StatBarSettings {
            max_value: 100.0,
            ..Default::default()
        },
    );

    let bar = entities.bar;
    app.world_mut()
        .run_system_once(move |mut commands: Commands| {
            commands
                .entity(bar)
                .stat_bar_command(StatBarCommand::AddValue(-30.0))
                .stat_bar_command(StatBarCommand::SetValueWithoutNotify(50.0))
                .stat_bar_command(StatBarCommand::AddValue(-50.0));
        })
        .expect("system runs");
    app.update();

    assert_eq!(app.world().resource::<Received>().0, vec![70.0, 0.0]);
    let fill_box = app.world().get::<AnchorBox>(entities.fill).unwrap();
    assert_eq!(fill_box.anchor_max.x, 0.0);
}

#[test]
fn entity_observers_see_their_bar_only() {
    #[derive(Resource, Default)]
    struct HpChanges(Vec<f32>);

    let mut app = setup_app();
    app.init_resource::<HpChanges>();
    let hp = spawn(&mut app, StatBarSettings { max_value: 10.0, ..Default::default() });
    let mp = spawn(&mut app, StatBarSettings { max_value: 10.0, ..Default::default() });

    app.world_mut().entity_mut(hp.bar).observe(
        |trigger: Trigger<StatBarValueChanged>, mut changes: ResMut<HpChanges>| {
            changes.0.push(trigger.event().value);
        },
    );

    set_value(&mut app, hp.bar, 4.0);
    set_value(&mut app, mp.bar, 3.0);

    assert_eq!(app.world().resource::<HpChanges>().0, vec![4.0]);
    assert_eq!(app.world().resource::<Received>().0, vec![4.0, 3.0]);
}

#[test]
fn vertical_filled_bar() {
    let mut app = setup_app();
    let entities = spawn(
        &mut app,
        StatBarSettings {
            max_value: 10.0,
            ..Default::default()
        },
    );
    app.world_mut()
        .entity_mut(entities.fill)
        .insert(FillImage::filled(Color::WHITE));
    app.world_mut()
        .stat_bar_mut(entities.bar)
        .unwrap()
        .set_direction(FillDirection::TopToBottom);
    app.update();

    set_value(&mut app, entities.bar, 2.5);
    let image = app.world().get::<FillImage>(entities.fill).unwrap();
    assert_eq!(image.fill_amount, 0.25);
    let fill_box = app.world().get::<AnchorBox>(entities.fill).unwrap();
    assert_eq!(fill_box.anchor_min, Vec2::ZERO);
    assert_eq!(fill_box.anchor_max, Vec2::ONE);
}

#[test]
fn world_access_errors() {
    let mut app = setup_app();
    let plain = app.world_mut().spawn_empty().id();
    assert_eq!(
        app.world().stat_bar(plain).err(),
        Some(StatBarError::MissingStatBar { entity: plain })
    );

    app.world_mut().despawn(plain);
    assert!(matches!(
        app.world_mut().stat_bar_mut(plain),
        Err(StatBarError::EntityNotFound { .. })
    ));
}
