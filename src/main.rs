use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow, WindowResolution};
use bevy::winit::WinitWindows;
use clap::{Parser, ValueEnum};
use scenegen::location::Coordinate;
use scenegen::sun::Season;
use std::io::{self, Cursor, Write};
use sunhouse::{DiagramPlugin, SceneSettings, location};
use winit::window::Icon;

#[derive(Parser)]
#[command(name = "sunhouse")]
#[command(about = "Draws how a house should face the sun at a given location")]
struct Cli {
    /// Address, place name or a "lat, lon" pair. Prompts when omitted.
    location: Option<String>,
    /// Season the sun position is approximated for
    #[arg(long, value_enum, default_value_t = SeasonArg::Winter)]
    season: SeasonArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SeasonArg {
    Winter,
    Summer,
}

impl From<SeasonArg> for Season {
    fn from(value: SeasonArg) -> Self {
        match value {
            SeasonArg::Winter => Season::Winter,
            SeasonArg::Summer => Season::Summer,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let input = match cli.location {
        Some(location) => location,
        None => prompt_for_location(),
    };

    let coordinate = match location::resolve_input(input.trim()) {
        Ok(Some(coordinate)) => coordinate,
        Ok(None) => {
            println!("Could not retrieve coordinates.");
            return;
        }
        Err(err) => {
            println!("Geocoding failed: {err}");
            return;
        }
    };

    run_viewer(coordinate, cli.season.into());
}

fn prompt_for_location() -> String {
    println!("Enter an address (e.g. 'Stanford') or coordinates (e.g. '37.42, -122.08')");
    print!("Address or coordinates: ");
    io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("failed to read from stdin");
    line
}

fn run_viewer(coordinate: Coordinate, season: Season) {
    let config = scenegen::get_config();
    App::new()
        .insert_resource(ClearColor(Color::srgb_u8(144, 238, 144)))
        .insert_resource(SceneSettings { coordinate, season })
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sunhouse".into(),
                resolution: WindowResolution::new(
                    config.canvas.width as u32,
                    config.canvas.height as u32,
                ),
                present_mode: PresentMode::AutoVsync,
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(DiagramPlugin)
        .add_systems(Startup, set_window_icon)
        .run();
}

fn set_window_icon(
    windows: Option<NonSend<WinitWindows>>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
) {
    let Some(windows) = windows else { return; };
    let Ok(primary_entity) = primary_window.single() else {
        return;
    };
    let Some(primary) = windows.get_window(primary_entity) else {
        return;
    };
    let icon_buf = Cursor::new(include_bytes!("../assets/icons/icon.png"));
    if let Ok(image) = image::load(icon_buf, image::ImageFormat::Png) {
        let image = image.into_rgba8();
        let (width, height) = image.dimensions();
        let rgba = image.into_raw();
        let icon = Icon::from_rgba(rgba, width, height).unwrap();
        primary.set_window_icon(Some(icon));
    };
}
