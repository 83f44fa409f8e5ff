//! Ficha Aggregate
//!
//! The character sheet owned by exactly one account. JSON field names are
//! the ones the browser client already uses (Portuguese, camelCase).
//!
//! Storage splits the ficha into the descriptive [`FichaSheet`], the three
//! ordered lists and the integer [`PointPools`]; responses flatten them back
//! into one object.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

use crate::domain::value_object::point_pool::PointPool;
use crate::error::{AccountError, AccountResult};

/// Default rarity of a new card
pub const DEFAULT_RARIDADE: &str = "Bronze";

// ============================================================================
// Nested documents
// ============================================================================

/// The six named attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Atributos {
    #[serde(rename = "força", deserialize_with = "lenient_int")]
    pub forca: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub agilidade: i64,
    #[serde(rename = "inteligência", deserialize_with = "lenient_int")]
    pub inteligencia: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub vigor: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub carisma: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub sabedoria: i64,
}

/// Ability or item card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Carta {
    pub nome: String,
    pub raridade: String,
    /// Base64 image, opaque to the server
    pub imagem: String,
    pub funcionalidade: String,
}

impl Default for Carta {
    fn default() -> Self {
        Self {
            nome: String::new(),
            raridade: DEFAULT_RARIDADE.to_string(),
            imagem: String::new(),
            funcionalidade: String::new(),
        }
    }
}

/// Unlockable progression node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Path {
    pub nome: String,
    pub desbloqueado: bool,
    pub descricao: String,
}

/// Descriptive and numeric fields of the sheet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FichaSheet {
    pub nome: String,
    #[serde(deserialize_with = "lenient_string")]
    pub idade: String,
    pub classe: String,
    pub energia_z: String,
    pub profissao: String,
    pub alinhamento: String,
    pub atributos: Atributos,
    #[serde(deserialize_with = "lenient_int")]
    pub vida: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub ca: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub iniciativa: i64,
    pub personalidade: String,
    /// Base64 portrait, opaque to the server
    pub imagem: String,
    pub titulos: String,
    /// General unassigned points
    #[serde(deserialize_with = "lenient_int")]
    pub pontos: i64,
    pub historico: String,
    pub aliados: String,
    pub notas: String,
}

/// Spendable counters, never negative
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointPools {
    #[serde(deserialize_with = "lenient_int")]
    pub cartas_pontos_disponiveis: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub cartazes_pontos_disponiveis: i32,
    #[serde(deserialize_with = "lenient_int")]
    pub path_points: i32,
}

impl PointPools {
    pub fn get(&self, pool: PointPool) -> i32 {
        match pool {
            PointPool::Cards => self.cartas_pontos_disponiveis,
            PointPool::Posters => self.cartazes_pontos_disponiveis,
            PointPool::Paths => self.path_points,
        }
    }

    pub fn get_mut(&mut self, pool: PointPool) -> &mut i32 {
        match pool {
            PointPool::Cards => &mut self.cartas_pontos_disponiveis,
            PointPool::Posters => &mut self.cartazes_pontos_disponiveis,
            PointPool::Paths => &mut self.path_points,
        }
    }

    /// Decrement `pool` by one if it is positive, returning the new value.
    pub fn spend(&mut self, pool: PointPool) -> AccountResult<i32> {
        let slot = self.get_mut(pool);
        if *slot <= 0 {
            return Err(AccountError::InsufficientPoints(pool));
        }
        *slot -= 1;
        Ok(*slot)
    }
}

// ============================================================================
// Ficha
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ficha {
    #[serde(flatten)]
    pub sheet: FichaSheet,
    pub cartas: Vec<Carta>,
    pub paths: Vec<Path>,
    /// Free-form records, stored verbatim
    pub path_connections: Vec<Value>,
    #[serde(flatten)]
    pub pools: PointPools,
    /// Optimistic concurrency token; bumped by every write
    #[serde(skip)]
    pub version: i64,
}

impl Ficha {
    /// Zero-valued ficha created together with an account
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Partial update
// ============================================================================

/// Shallow field-level override for [`Ficha`].
///
/// Absent fields keep their stored value; present fields replace it
/// wholesale, including lists. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FichaPatch {
    pub nome: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub idade: Option<String>,
    pub classe: Option<String>,
    pub energia_z: Option<String>,
    pub profissao: Option<String>,
    pub alinhamento: Option<String>,
    pub atributos: Option<Atributos>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub vida: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub ca: Option<i64>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub iniciativa: Option<i64>,
    pub personalidade: Option<String>,
    pub imagem: Option<String>,
    pub titulos: Option<String>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub pontos: Option<i64>,
    pub historico: Option<String>,
    pub aliados: Option<String>,
    pub notas: Option<String>,
    pub cartas: Option<Vec<Carta>>,
    pub paths: Option<Vec<Path>>,
    pub path_connections: Option<Vec<Value>>,
    #[serde(alias = "pontosCartas", deserialize_with = "lenient_opt_int")]
    pub cartas_pontos_disponiveis: Option<i32>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub cartazes_pontos_disponiveis: Option<i32>,
    #[serde(deserialize_with = "lenient_opt_int")]
    pub path_points: Option<i32>,
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl FichaPatch {
    /// Reject pool overwrites below zero
    pub fn validate(&self) -> AccountResult<()> {
        let pools = [
            (PointPool::Cards, self.cartas_pontos_disponiveis),
            (PointPool::Posters, self.cartazes_pontos_disponiveis),
            (PointPool::Paths, self.path_points),
        ];

        for (pool, value) in pools {
            if value.is_some_and(|v| v < 0) {
                return Err(AccountError::InvalidFicha(format!(
                    "O campo {} não pode ser negativo.",
                    pool.json_key()
                )));
            }
        }
        Ok(())
    }

    /// Merge into `ficha`. Nothing is changed when validation fails.
    pub fn apply_to(self, ficha: &mut Ficha) -> AccountResult<()> {
        self.validate()?;

        let sheet = &mut ficha.sheet;
        set(&mut sheet.nome, self.nome);
        set(&mut sheet.idade, self.idade);
        set(&mut sheet.classe, self.classe);
        set(&mut sheet.energia_z, self.energia_z);
        set(&mut sheet.profissao, self.profissao);
        set(&mut sheet.alinhamento, self.alinhamento);
        set(&mut sheet.atributos, self.atributos);
        set(&mut sheet.vida, self.vida);
        set(&mut sheet.ca, self.ca);
        set(&mut sheet.iniciativa, self.iniciativa);
        set(&mut sheet.personalidade, self.personalidade);
        set(&mut sheet.imagem, self.imagem);
        set(&mut sheet.titulos, self.titulos);
        set(&mut sheet.pontos, self.pontos);
        set(&mut sheet.historico, self.historico);
        set(&mut sheet.aliados, self.aliados);
        set(&mut sheet.notas, self.notas);

        set(&mut ficha.cartas, self.cartas);
        set(&mut ficha.paths, self.paths);
        set(&mut ficha.path_connections, self.path_connections);

        let pools = &mut ficha.pools;
        set(&mut pools.cartas_pontos_disponiveis, self.cartas_pontos_disponiveis);
        set(&mut pools.cartazes_pontos_disponiveis, self.cartazes_pontos_disponiveis);
        set(&mut pools.path_points, self.path_points);

        Ok(())
    }
}

// ============================================================================
// Serde helpers
// ============================================================================

/// Forms send `idade` as either a string or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    StringOrNumber::deserialize(deserializer).map(String::from)
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<StringOrNumber>::deserialize(deserializer).map(|v| v.map(String::from))
}

/// Numeric fields arrive from forms as numbers or numeric strings. A blank
/// string is zero; fractional or non-numeric values are rejected.
#[derive(Deserialize)]
#[serde(untagged)]
enum IntegerLike {
    Number(serde_json::Number),
    String(String),
}

/// Largest magnitude an `f64` holds without losing integer precision
const MAX_EXACT_F64: f64 = 9_007_199_254_740_991.0;

fn integral(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_F64)
        .then_some(value as i64)
}

impl IntegerLike {
    fn to_i64(&self) -> Option<i64> {
        match self {
            IntegerLike::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
            IntegerLike::String(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Some(0);
                }
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(integral))
            }
        }
    }

    fn into_int<T, E>(self) -> Result<T, E>
    where
        T: TryFrom<i64>,
        E: de::Error,
    {
        self.to_i64()
            .and_then(|v| T::try_from(v).ok())
            .ok_or_else(|| match self {
                IntegerLike::Number(n) => E::custom(format!("expected an integer, got {n}")),
                IntegerLike::String(s) => E::custom(format!("expected an integer, got {s:?}")),
            })
    }
}

fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    IntegerLike::deserialize(deserializer)?.into_int()
}

fn lenient_opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    Option::<IntegerLike>::deserialize(deserializer)?
        .map(IntegerLike::into_int)
        .transpose()
}
