//! Handlers for the convert run and config actions.

use std::path::Path;

use super::args::{Args, ConfigAction};
use crate::config::{default_path as get_config_path, Config, ConfigError, DEFAULT_CONFIG_TOML};
use crate::pipeline::{AsciiImage, PipelineOptions};
use crate::{AsciiError, CharacterRamp};

/// Errors surfaced by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Ascii(#[from] AsciiError),
    #[error("Config file already exists: {0}\nUse 'img-ascii config show' to view current settings.")]
    ConfigExists(String),
    #[error("Error writing config file '{path}': {source}")]
    ConfigWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Merge config file values with command-line overrides.
pub fn resolve_options(args: &Args, config: &Config) -> Result<PipelineOptions, AsciiError> {
    let mut options = config.pipeline_options()?;
    if let Some(ramp) = &args.ramp {
        options.ramp = CharacterRamp::from_light_to_dark(ramp)?;
    }
    if let Some(max_width) = args.max_width {
        options.max_width = max_width;
    }
    if let Some(dir) = &args.out_dir {
        options.output_dir = dir.clone();
    }
    Ok(options)
}

/// Convert one image according to the parsed arguments.
///
/// HTML output is returned for the caller to print; text output is saved and
/// the written path is returned instead.
pub fn run_convert(image: &Path, args: &Args) -> Result<String, CliError> {
    let config = Config::load(args.config.as_deref())?;
    let options = resolve_options(args, &config)?;
    let ascii = AsciiImage::open_with(image, options)?;

    log::debug!(
        "Loaded {} as {}x{}, stride {}",
        image.display(),
        ascii.width(),
        ascii.height(),
        ascii.ramp().stride()
    );

    if args.html {
        Ok(ascii.create_ascii_to_html())
    } else {
        let path = ascii.create_ascii_to_file(args.output.as_deref())?;
        Ok(format!("Saved ASCII art to {}", path.display()))
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, config_path: Option<&Path>) -> Result<(), CliError> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(get_config_path);

    match action {
        ConfigAction::Show => {
            let config = Config::load(Some(&config_path))?;
            let ramp: String = CharacterRamp::from_light_to_dark(&config.ascii.ramp)?
                .glyphs()
                .iter()
                .collect();

            println!("Current configuration:");
            println!("  Ramp (lightest first): {}", config.ascii.ramp);
            println!("  Ramp (darkest first):  {}", ramp);
            println!("  Stride: {}", config.ascii.ramp.chars().count());
            println!("  Max width: {}", config.ascii.max_width);
            println!(
                "  Output dir: {}",
                config
                    .output
                    .dir
                    .as_deref()
                    .unwrap_or_else(|| Path::new("."))
                    .display()
            );
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(CliError::ConfigExists(config_path.display().to_string()));
            }

            let write_err = |e| CliError::ConfigWrite {
                path: config_path.display().to_string(),
                source: e,
            };

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(write_err)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG_TOML).map_err(write_err)?;

            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use image::{DynamicImage, Rgb, RgbImage};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
        let path = dir.join(name);
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_resolve_options_cli_overrides_config() {
        let args = Args::parse_from([
            "img-ascii",
            "x.png",
            "--ramp",
            "ab",
            "--max-width",
            "64",
            "-d",
            "/tmp/out",
        ]);
        let options = resolve_options(&args, &Config::default()).unwrap();
        assert_eq!(options.ramp.glyphs(), &['b', 'a']);
        assert_eq!(options.max_width, 64);
        assert_eq!(options.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_resolve_options_bad_ramp() {
        let args = Args::parse_from(["img-ascii", "x.png", "--ramp", "a"]);
        let err = resolve_options(&args, &Config::default()).unwrap_err();
        assert!(matches!(err, AsciiError::InvalidRamp { len: 1 }));
    }

    #[test]
    fn test_run_convert_writes_text_file() {
        let dir = TempDir::new().unwrap();
        let image = write_png(dir.path(), "black.png", 20, 10, [0, 0, 0]);
        let out_dir = dir.path().to_str().unwrap();
        let config = dir.path().join("none.toml");
        let args = Args::parse_from([
            "img-ascii",
            image.to_str().unwrap(),
            "-o",
            "black",
            "-d",
            out_dir,
            "-c",
            config.to_str().unwrap(),
        ]);

        let message = run_convert(&image, &args).unwrap();
        assert!(message.contains("black.txt"));
        let written = std::fs::read_to_string(dir.path().join("black.txt")).unwrap();
        assert!(written.starts_with("# # "));
    }

    #[test]
    fn test_run_convert_html() {
        let dir = TempDir::new().unwrap();
        let image = write_png(dir.path(), "white.png", 10, 10, [255, 255, 255]);
        let config = dir.path().join("none.toml");
        let args = Args::parse_from([
            "img-ascii",
            "--html",
            image.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ]);

        let html = run_convert(&image, &args).unwrap();
        assert!(html.ends_with(".</div><br>"));
    }

    #[test]
    fn test_run_convert_missing_image() {
        let dir = TempDir::new().unwrap();
        let image = dir.path().join("missing.png");
        let config = dir.path().join("none.toml");
        let args = Args::parse_from([
            "img-ascii",
            image.to_str().unwrap(),
            "-c",
            config.to_str().unwrap(),
        ]);

        let err = run_convert(&image, &args).unwrap_err();
        assert!(matches!(err, CliError::Ascii(AsciiError::NotFound { .. })));
    }

    #[test]
    fn test_config_init_then_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        handle_config_action(ConfigAction::Init, Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);

        let err = handle_config_action(ConfigAction::Init, Some(&path)).unwrap_err();
        assert!(matches!(err, CliError::ConfigExists(_)));
    }

    #[test]
    fn test_config_show_without_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        handle_config_action(ConfigAction::Show, Some(&path)).unwrap();
    }
}
