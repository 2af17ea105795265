//! 종목 목록 설정 로더.
//!
//! 지원 형식:
//! - **JSON** (기본): `[{"name": "...", "symbol": "...", "category": "index"}]`
//! - **TOML** (`.toml` 확장자): `[[instruments]]` 배열
//!
//! 알 수 없는 카테고리나 필드, 빈 값, 중복 심볼은 로드 시점에 거부됩니다.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{Category, Instrument};

/// 검증된 종목 목록.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstrumentList {
    instruments: Vec<Instrument>,
}

/// TOML 파일의 최상위 구조.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlInstrumentFile {
    instruments: Vec<Instrument>,
}

impl InstrumentList {
    /// 종목 목록을 검증하여 생성합니다.
    pub fn new(instruments: Vec<Instrument>) -> ConfigResult<Self> {
        if instruments.is_empty() {
            return Err(ConfigError::Invalid("종목 목록이 비어 있습니다".to_string()));
        }

        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(instruments.len());

        for (idx, inst) in instruments.into_iter().enumerate() {
            let name = inst.name.trim().to_string();
            let symbol = inst.symbol.trim().to_string();

            if name.is_empty() {
                return Err(ConfigError::Invalid(format!("{}번째 종목의 name이 비어 있습니다", idx + 1)));
            }
            if symbol.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "{}번째 종목({})의 symbol이 비어 있습니다",
                    idx + 1,
                    name
                )));
            }
            if !seen.insert(symbol.clone()) {
                return Err(ConfigError::Invalid(format!("중복된 심볼: {}", symbol)));
            }

            validated.push(Instrument::new(name, symbol, inst.category));
        }

        Ok(Self {
            instruments: validated,
        })
    }

    /// 파일에서 종목 목록을 로드합니다.
    ///
    /// 확장자가 `.toml`이면 TOML, 그 외에는 JSON으로 해석합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let instruments = if is_toml {
            Self::parse_toml(&raw).map_err(|e| ConfigError::malformed(path, e))?
        } else {
            Self::parse_json(&raw).map_err(|e| ConfigError::malformed(path, e))?
        };

        let list = Self::new(instruments)?;
        tracing::debug!(path = %path.display(), count = list.len(), "종목 목록 로드 완료");
        Ok(list)
    }

    fn parse_json(raw: &str) -> Result<Vec<Instrument>, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn parse_toml(raw: &str) -> Result<Vec<Instrument>, toml::de::Error> {
        toml::from_str::<TomlInstrumentFile>(raw).map(|file| file.instruments)
    }

    /// 설정 순서대로 종목을 반환합니다.
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// 특정 카테고리 종목 수.
    pub fn count_by_category(&self, category: Category) -> usize {
        self.instruments
            .iter()
            .filter(|i| i.category == category)
            .count()
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

impl<'a> IntoIterator for &'a InstrumentList {
    type Item = &'a Instrument;
    type IntoIter = std::slice::Iter<'a, Instrument>;

    fn into_iter(self) -> Self::IntoIter {
        self.instruments.iter()
    }
}
