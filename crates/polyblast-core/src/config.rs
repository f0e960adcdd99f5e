//! Game configuration and its plain-text loader.
//!
//! The file is whitespace-delimited, one section per line, the first token
//! naming the section:
//!
//! ```text
//! Window W H FL FS
//! Player SR CR S FR FG FB OR OG OB OT V
//! Enemy  SR CR SMIN SMAX OR OG OB OT VMIN VMAX L SI
//! Bullet SR CR S FR FG FB OR OG OB OT V L
//! ```
//!
//! Unknown sections (e.g. `Font`) are skipped. Lines starting with `#` are
//! comments. Malformed or missing values are errors.

use std::path::{Path, PathBuf};
use std::str::{FromStr, SplitWhitespace};

use serde::{Deserialize, Serialize};

use crate::types::{Rgba, Vec2};

/// Errors raised while loading a config file.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing `{0}` section")]
    MissingSection(&'static str),

    #[error("`{section}` section is missing value `{field}`")]
    MissingValue {
        section: &'static str,
        field: &'static str,
    },

    #[error("`{section}` value `{field}` is not a valid number: {token:?}")]
    InvalidNumber {
        section: &'static str,
        field: &'static str,
        token: String,
    },

    #[error("window size {width}x{height} must be non-zero")]
    InvalidWindow { width: u32, height: u32 },

    #[error("enemy vertex range {min}..={max} is empty or below 3")]
    InvalidVertexRange { min: u32, max: u32 },
}

/// Window / frame-loop settings (`Window` line).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    /// Target frames per second.
    pub frame_limit: u32,
    pub fullscreen: bool,
}

impl WindowConfig {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) / 2.0
    }
}

/// `Player` line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// SR
    pub shape_radius: u32,
    /// CR
    pub collision_radius: u32,
    /// S, pixels per frame per active axis.
    pub speed: f32,
    /// FR FG FB
    pub fill: Rgba,
    /// OR OG OB
    pub outline: Rgba,
    /// OT
    pub outline_thickness: u32,
    /// V
    pub vertices: u32,
}

/// `Enemy` line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyConfig {
    pub shape_radius: u32,
    pub collision_radius: u32,
    /// SMIN. Parsed for completeness; spawns use the fixed diagonal set.
    pub min_speed: f32,
    /// SMAX
    pub max_speed: f32,
    pub outline: Rgba,
    pub outline_thickness: u32,
    /// VMIN
    pub min_vertices: u32,
    /// VMAX
    pub max_vertices: u32,
    /// L, lifespan in frames of the fragments an enemy splits into.
    pub lifespan: u32,
    /// SI, frames between enemy spawns.
    pub spawn_interval: u32,
}

/// `Bullet` line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletConfig {
    pub shape_radius: u32,
    pub collision_radius: u32,
    pub speed: f32,
    pub fill: Rgba,
    pub outline: Rgba,
    pub outline_thickness: u32,
    pub vertices: u32,
    /// L, frames before the bullet fades out.
    pub lifespan: u32,
}

/// All configuration, immutable after load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                width: 1280,
                height: 720,
                frame_limit: 60,
                fullscreen: false,
            },
            player: PlayerConfig {
                shape_radius: 32,
                collision_radius: 32,
                speed: 5.0,
                fill: Rgba::rgb(5, 5, 5),
                outline: Rgba::rgb(255, 0, 0),
                outline_thickness: 4,
                vertices: 8,
            },
            enemy: EnemyConfig {
                shape_radius: 32,
                collision_radius: 32,
                min_speed: 3.0,
                max_speed: 3.0,
                outline: Rgba::rgb(255, 255, 255),
                outline_thickness: 2,
                min_vertices: 3,
                max_vertices: 8,
                lifespan: 90,
                spawn_interval: 60,
            },
            bullet: BulletConfig {
                shape_radius: 10,
                collision_radius: 10,
                speed: 20.0,
                fill: Rgba::rgb(255, 255, 255),
                outline: Rgba::rgb(255, 0, 0),
                outline_thickness: 2,
                vertices: 20,
                lifespan: 90,
            },
        }
    }
}

impl GameConfig {
    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = contents.parse()?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }
}

impl FromStr for GameConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut window = None;
        let mut player = None;
        let mut enemy = None;
        let mut bullet = None;

        for line in s.lines() {
            let mut tokens = line.split_whitespace();
            let Some(section) = tokens.next() else {
                continue;
            };
            if section.starts_with('#') {
                continue;
            }
            match section {
                "Window" => window = Some(parse_window(Fields::new("Window", tokens))?),
                "Player" => player = Some(parse_player(Fields::new("Player", tokens))?),
                "Enemy" => enemy = Some(parse_enemy(Fields::new("Enemy", tokens))?),
                "Bullet" => bullet = Some(parse_bullet(Fields::new("Bullet", tokens))?),
                other => log::warn!("ignoring config section `{other}`"),
            }
        }

        Ok(Self {
            window: window.ok_or(ConfigError::MissingSection("Window"))?,
            player: player.ok_or(ConfigError::MissingSection("Player"))?,
            enemy: enemy.ok_or(ConfigError::MissingSection("Enemy"))?,
            bullet: bullet.ok_or(ConfigError::MissingSection("Bullet"))?,
        })
    }
}

/// Ordered reader over the numeric tokens of one section line.
struct Fields<'a> {
    section: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn new(section: &'static str, tokens: SplitWhitespace<'a>) -> Self {
        Self { section, tokens }
    }

    fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, ConfigError> {
        let token = self.tokens.next().ok_or(ConfigError::MissingValue {
            section: self.section,
            field,
        })?;
        token.parse().map_err(|_| ConfigError::InvalidNumber {
            section: self.section,
            field,
            token: token.to_string(),
        })
    }

    fn rgb(&mut self, r: &'static str, g: &'static str, b: &'static str) -> Result<Rgba, ConfigError> {
        Ok(Rgba::rgb(self.next(r)?, self.next(g)?, self.next(b)?))
    }

    fn finish(mut self) {
        if self.tokens.next().is_some() {
            log::warn!("trailing values after `{}` section ignored", self.section);
        }
    }
}

fn parse_window(mut f: Fields<'_>) -> Result<WindowConfig, ConfigError> {
    let width = f.next("W")?;
    let height = f.next("H")?;
    let frame_limit = f.next("FL")?;
    let fullscreen = f.next::<u32>("FS")? != 0;
    f.finish();
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidWindow { width, height });
    }
    Ok(WindowConfig {
        width,
        height,
        frame_limit,
        fullscreen,
    })
}

fn parse_player(mut f: Fields<'_>) -> Result<PlayerConfig, ConfigError> {
    let config = PlayerConfig {
        shape_radius: f.next("SR")?,
        collision_radius: f.next("CR")?,
        speed: f.next("S")?,
        fill: f.rgb("FR", "FG", "FB")?,
        outline: f.rgb("OR", "OG", "OB")?,
        outline_thickness: f.next("OT")?,
        vertices: f.next("V")?,
    };
    f.finish();
    Ok(config)
}

fn parse_enemy(mut f: Fields<'_>) -> Result<EnemyConfig, ConfigError> {
    let config = EnemyConfig {
        shape_radius: f.next("SR")?,
        collision_radius: f.next("CR")?,
        min_speed: f.next("SMIN")?,
        max_speed: f.next("SMAX")?,
        outline: f.rgb("OR", "OG", "OB")?,
        outline_thickness: f.next("OT")?,
        min_vertices: f.next("VMIN")?,
        max_vertices: f.next("VMAX")?,
        lifespan: f.next("L")?,
        spawn_interval: f.next("SI")?,
    };
    f.finish();
    if config.min_vertices < 3 || config.min_vertices > config.max_vertices {
        return Err(ConfigError::InvalidVertexRange {
            min: config.min_vertices,
            max: config.max_vertices,
        });
    }
    Ok(config)
}

fn parse_bullet(mut f: Fields<'_>) -> Result<BulletConfig, ConfigError> {
    let config = BulletConfig {
        shape_radius: f.next("SR")?,
        collision_radius: f.next("CR")?,
        speed: f.next("S")?,
        fill: f.rgb("FR", "FG", "FB")?,
        outline: f.rgb("OR", "OG", "OB")?,
        outline_thickness: f.next("OT")?,
        vertices: f.next("V")?,
        lifespan: f.next("L")?,
    };
    f.finish();
    Ok(config)
}
