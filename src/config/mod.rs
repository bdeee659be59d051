/// 粒子系统配置
///
/// 提供 TOML 配置文件加载与校验
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 校验错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 粒子模拟配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// 单帧时长上限（时间单位）
    pub maximum_frame_time: f32,

    /// 粒子存储的初始容量
    pub particle_capacity: usize,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            maximum_frame_time: 0.1,
            particle_capacity: 256,
        }
    }
}

impl ParticlesConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 TOML 文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从 TOML 字符串加载配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        log::info!(
            "particles config loaded: maximum_frame_time={}, particle_capacity={}",
            config.maximum_frame_time,
            config.particle_capacity
        );
        Ok(config)
    }

    /// 校验配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.maximum_frame_time.is_finite() || self.maximum_frame_time <= 0.0 {
            return Err(ConfigError::ValidationError(
                "maximum_frame_time must be finite and positive".to_string(),
            ));
        }
        Ok(())
    }
}
