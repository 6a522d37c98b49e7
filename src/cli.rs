use std::path::PathBuf;

use anyhow::{anyhow, Error};
use clap::{Args, Parser};
use log::Level;
use rayon::prelude::*;

use identicon::{
    render::DEFAULT_JPEG_QUALITY,
    utils::{load_config, save_manifest},
    ChecksumKind,
    Icon,
    IconConfig,
    IconError,
    IconSummary,
    ImageCodec,
    ImageFormat,
    Rgb,
};

/// Mirrored block icon generator
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value_t = Level::Warn)]
    pub log_level: Level,

    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Parser)]
pub enum SubCommand {
    Generate(Generate),
    Pattern(ShowPattern),
    Show(Show),
}

/// Icon settings shared by commands. Flags override the config file.
#[derive(Args)]
pub struct IconArgs {
    /// JSON file with icon settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Blocks per row and column
    #[arg(long)]
    size: Option<u32>,
    /// Icon side in pixels
    #[arg(long)]
    pixels: Option<u32>,
    /// Foreground color (#rrggbb)
    #[arg(long)]
    foreground: Option<Rgb>,
    /// Background color (#rrggbb)
    #[arg(long)]
    background: Option<Rgb>,
    /// Use the complement of the foreground as background
    #[arg(long)]
    complementary: bool,
    /// md5 or sha256
    #[arg(long)]
    checksum: Option<ChecksumKind>,
}

impl IconArgs {
    fn load(&self) -> Result<IconConfig, IconError> {
        let mut config = match self.config {
            Some(ref path) => load_config(path)?,
            None => IconConfig::default(),
        };
        config.size = self.size.or(config.size);
        config.pixels = self.pixels.or(config.pixels);
        config.foreground = self.foreground.or(config.foreground);
        config.background = self.background.or(config.background);
        config.complementary_background |= self.complementary;
        config.checksum = self.checksum.or(config.checksum);
        Ok(config)
    }
}

fn build_icon(name: &str, config: &IconConfig) -> Result<Icon, IconError> {
    Icon::builder(name)
        .checksum(config.checksum.unwrap_or_default())
        .options(config.options())
        .build()
}

/// Generate icon files
#[derive(Parser)]
pub struct Generate {
    #[arg(required = true)]
    names: Vec<String>,

    #[command(flatten)]
    icon: IconArgs,

    /// png or jpeg
    #[arg(long)]
    format: Option<ImageFormat>,
    /// JPEG quality (1-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: Option<u8>,
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
    /// Write a JSON description of the generated icons
    #[arg(long)]
    manifest: Option<PathBuf>,
}

impl Generate {
    pub fn execute(&self) -> Result<(), Error> {
        let config = self.icon.load()?;
        let format = self.format.or(config.format).unwrap_or_default();
        let codec = ImageCodec {
            jpeg_quality: self.quality
                .or(config.jpeg_quality)
                .unwrap_or(DEFAULT_JPEG_QUALITY),
        };
        // icons do not share state, so they are built in parallel
        let results: Vec<(&String, Result<IconSummary, IconError>)> = self.names
            .par_iter()
            .map(|name| {
                let result = build_icon(name, &config).and_then(|icon| {
                    let path = icon.save_to_with(&codec, &self.output_dir, format)?;
                    let mut summary = icon.summary();
                    summary.file = Some(path.display().to_string());
                    Ok(summary)
                });
                (name, result)
            })
            .collect();

        let mut summaries = Vec::new();
        let mut failed = 0;
        for (name, result) in results {
            match result {
                Ok(summary) => {
                    println!("{}", summary.file.as_deref().unwrap_or(name));
                    summaries.push(summary);
                },
                Err(error) => {
                    log::error!("failed to generate icon {:?}: {}", name, error);
                    failed += 1;
                },
            };
        };
        if let Some(ref path) = self.manifest {
            save_manifest(&summaries, path)?;
        };
        if failed > 0 {
            return Err(anyhow!("{} of {} icons failed", failed, self.names.len()));
        };
        Ok(())
    }
}

/// Print the block pattern of a name
#[derive(Parser)]
pub struct ShowPattern {
    name: String,
    #[arg(long)]
    size: Option<u32>,
    #[arg(long)]
    checksum: Option<ChecksumKind>,
}

impl ShowPattern {
    pub fn execute(&self) -> Result<(), Error> {
        let config = IconConfig {
            size: self.size,
            checksum: self.checksum,
            ..Default::default()
        };
        let icon = build_icon(&self.name, &config)?;
        println!("{}", icon.pattern());
        Ok(())
    }
}

/// Describe an icon without writing it
#[derive(Parser)]
pub struct Show {
    name: String,

    #[command(flatten)]
    icon: IconArgs,
}

impl Show {
    pub fn execute(&self) -> Result<(), Error> {
        let config = self.icon.load()?;
        let icon = build_icon(&self.name, &config)?;
        print!("{}", icon);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "identicon", "generate", "Simple", "Custom",
            "--size", "7", "--foreground", "#7a1015", "--complementary",
            "--format", "jpg",
        ]).unwrap();
        let SubCommand::Generate(cmd) = cli.subcmd else {
            panic!("expected generate");
        };
        assert_eq!(cmd.names, vec!["Simple", "Custom"]);
        assert_eq!(cmd.format, Some(ImageFormat::Jpeg));
        let config = cmd.icon.load().unwrap();
        assert_eq!(config.size, Some(7));
        assert_eq!(config.foreground, Some(Rgb::new(122, 16, 21)));
        assert!(config.complementary_background);
    }

    #[test]
    fn test_parse_invalid_color() {
        let result = Cli::try_parse_from([
            "identicon", "show", "Simple", "--background", "nope",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_log_level() {
        let cli = Cli::try_parse_from(["identicon", "--log-level", "debug", "pattern", "x"])
            .unwrap();
        assert_eq!(cli.log_level, Level::Debug);
    }

    #[test]
    fn test_build_icon_from_config() {
        let config = IconConfig {
            size: Some(7),
            pixels: Some(300),
            foreground: Some(Rgb::new(122, 16, 21)),
            complementary_background: true,
            ..Default::default()
        };
        let icon = build_icon("Custom", &config).unwrap();
        assert_eq!(icon.background(), Rgb::new(16, 122, 117));
        assert_eq!(icon.pixels(), 300);
    }

    #[test]
    fn test_generate_writes_files_and_manifest() {
        let directory = std::env::temp_dir()
            .join(format!("identicon-cli-{}", std::process::id()));
        std::fs::create_dir_all(&directory).unwrap();
        let manifest = directory.join("manifest.json");
        let cli = Cli::try_parse_from([
            "identicon", "generate", "one", "two",
            "--output-dir", directory.to_str().unwrap(),
            "--manifest", manifest.to_str().unwrap(),
        ]).unwrap();
        let SubCommand::Generate(cmd) = cli.subcmd else {
            panic!("expected generate");
        };
        cmd.execute().unwrap();
        assert!(directory.join("one.png").exists());
        assert!(directory.join("two.png").exists());
        let file = std::fs::File::open(&manifest).unwrap();
        let summaries: Vec<IconSummary> = serde_json::from_reader(file).unwrap();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "one");
        std::fs::remove_dir_all(&directory).unwrap();
    }

    #[test]
    fn test_generate_reports_failures() {
        let cli = Cli::try_parse_from([
            "identicon", "generate", "Simple", "--pixels", "99",
            "--output-dir", "/nonexistent-identicon-dir",
        ]).unwrap();
        let SubCommand::Generate(cmd) = cli.subcmd else {
            panic!("expected generate");
        };
        assert!(cmd.execute().is_err());
    }
}
