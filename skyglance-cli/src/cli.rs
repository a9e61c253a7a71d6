use std::{cell::RefCell, rc::Rc};

use clap::{Parser, Subcommand};
use inquire::InquireError;

use skyglance_core::{Config, MapView, Notifier, OpenWeather, WeatherWidget, render, sync_map};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyglance", version, about = "City weather widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weather provider API key.
    Configure,

    /// Fetch and display current weather for a city, then exit.
    Show {
        /// City name.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(city).await,
            None => interactive().await,
        }
    }
}

/// Prints user notices where a browser widget would pop a modal.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("! {message}");
    }
}

/// Terminal stand-in for the map component: remembers the last view it was
/// asked to show and prints it as a one-line frame.
#[derive(Debug, Default)]
struct AsciiMap {
    view: Option<(f64, f64, u8)>,
}

impl MapView for AsciiMap {
    fn set_view(&mut self, latitude: f64, longitude: f64, zoom: u8) {
        self.view = Some((latitude, longitude, zoom));
    }
}

impl AsciiMap {
    fn frame(&self) -> Option<String> {
        let (latitude, longitude, zoom) = self.view?;
        Some(format!(
            "[map] marker at {latitude:.4}, {longitude:.4} (zoom {zoom})"
        ))
    }
}

fn build_widget() -> anyhow::Result<WeatherWidget<OpenWeather, TerminalNotifier>> {
    let config = Config::load()?;
    let provider = OpenWeather::from_config(&config);
    Ok(WeatherWidget::new(provider, TerminalNotifier))
}

async fn show(city: String) -> anyhow::Result<()> {
    let mut widget = build_widget()?;
    let map = Rc::new(RefCell::new(AsciiMap::default()));
    sync_map(widget.state_mut(), Rc::clone(&map));

    widget.set_query(city);
    widget.search().await;

    println!("{}", render(widget.snapshot()));
    if let Some(frame) = map.borrow().frame() {
        println!("{frame}");
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let mut widget = build_widget()?;
    let map = Rc::new(RefCell::new(AsciiMap::default()));
    sync_map(widget.state_mut(), Rc::clone(&map));

    println!("{}", render(widget.snapshot()));

    loop {
        let query = match inquire::Text::new("City:").prompt() {
            Ok(query) => query,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        widget.set_query(query);
        widget.search().await;

        println!("{}", render(widget.snapshot()));
        if let Some(frame) = map.borrow().frame() {
            println!("{frame}");
        }
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);
    config.save()?;

    println!("Saved API key to {}", Config::config_file_path()?.display());
    Ok(())
}
