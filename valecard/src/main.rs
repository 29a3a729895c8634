mod assets;
mod canvas;
mod card;
mod compose;
mod config;
mod error;
mod font;

use std::ffi::OsStr;
use std::path::PathBuf;

use valecard_core::AbilityRenderer;

use crate::assets::AssetStore;
use crate::canvas::Canvas;
use crate::card::CardDoc;
use crate::compose::Fonts;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::font::Font;

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Render(Options),
    PrintConfig,
    InitConfig,
    CheckConfig,
    Version,
    Help,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    card: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
}

impl Options {
    /// `-o` if given, else `<card stem>.png` in the working directory.
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            let mut name = self
                .card
                .file_stem()
                .unwrap_or(OsStr::new("card"))
                .to_os_string();
            name.push(".png");
            PathBuf::from(name)
        })
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command> {
    let mut opts = Options::default();
    let mut card = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print-config" => return Ok(Command::PrintConfig),
            "--init-config" => return Ok(Command::InitConfig),
            "--check-config" => return Ok(Command::CheckConfig),
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--output" | "-o" => opts.output = Some(value(&arg, args.next())?),
            "--config" => opts.config = Some(value(&arg, args.next())?),
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(Error::Usage(format!("unknown option {s}")));
            }
            _ if card.is_some() => {
                return Err(Error::Usage(format!("unexpected argument {arg}")));
            }
            _ => card = Some(PathBuf::from(arg)),
        }
    }
    opts.card = card.ok_or_else(|| Error::Usage(String::from("missing <CARD.toml>")))?;
    Ok(Command::Render(opts))
}

fn value(flag: &str, next: Option<String>) -> Result<PathBuf> {
    next.map(PathBuf::from)
        .ok_or_else(|| Error::Usage(format!("{flag} needs a value")))
}

fn print_help() {
    println!("valecard {}", env!("CARGO_PKG_VERSION"));
    println!("Renders a trading card from a TOML card file to PNG\n");
    println!("USAGE:");
    println!("    valecard [OPTIONS] <CARD.toml>\n");
    println!("OPTIONS:");
    println!("    -o, --output <PATH>    Output PNG (default: <card stem>.png)");
    println!("    --config <PATH>        Use this config file instead of the default");
    println!("    --print-config         Print the default configuration to stdout");
    println!("    --init-config          Write the default configuration file");
    println!("    --check-config         Validate the default configuration file");
    println!("    --version, -V          Print version information");
    println!("    --help, -h             Print this help message");
}

fn render(opts: &Options) -> Result<()> {
    let config = match &opts.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let card = CardDoc::load(&opts.card)?;

    let ability_font = Font::load(&config.assets.resolve(&config.assets.ability_font))?;
    let name_font = Font::load(&config.assets.resolve(&config.assets.name_font))?;
    let assets = AssetStore::load(&config.assets.dir, &card);

    let (w, h) = config.export.pixel_size(config.style.card_aspect);
    let mut canvas = Canvas::new(w, h, &assets);
    if !config.export.transparent {
        canvas.clear(config.export.background);
    }

    let mut renderer = AbilityRenderer::new(config.style.clone());
    let fonts = Fonts {
        ability: &ability_font,
        name: &name_font,
    };
    compose::draw_card(&mut canvas, &mut renderer, &card, &assets, fonts);

    canvas.save_png(&opts.output_path())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = match parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run `valecard --help` for usage");
            std::process::exit(2);
        }
    };

    let result = match command {
        Command::PrintConfig => toml::to_string_pretty(&Config::default())
            .map(|s| print!("{s}"))
            .map_err(Error::from),
        Command::InitConfig => Config::default()
            .save()
            .map(|path| log::info!("config: wrote defaults to {}", path.display())),
        Command::CheckConfig => Config::try_load().map(|_| {
            println!("{}: ok", config::config_path().display());
        }),
        Command::Version => {
            println!("valecard {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Render(opts) => render(&opts),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
