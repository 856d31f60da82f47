use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{
    Decode, Encode, FromRow, Postgres, Type,
    encode::IsNull,
    error::BoxDynError,
    postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef},
};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Smartphones,
    Laptops,
    Tablets,
    Tv,
    Audio,
    Accessories,
}

// Stored as its name in a text column.
impl Type<Postgres> for Category {
    fn type_info() -> PgTypeInfo {
        <&str as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <&str as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for Category {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let name = <&str as Decode<Postgres>>::decode(value)?;
        Ok(name.parse::<Category>()?)
    }
}

impl Encode<'_, Postgres> for Category {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <&str as Encode<Postgres>>::encode_by_ref(&self.as_ref(), buf)
    }
}

/// A catalog entry. `id` is `None` until the row has been inserted.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<Category>,
    pub amount: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn category_names_are_upper_case() {
        assert_eq!(Category::Tv.to_string(), "TV");
        assert_eq!(Category::Smartphones.as_ref(), "SMARTPHONES");
        assert_eq!("ACCESSORIES".parse::<Category>().unwrap(), Category::Accessories);
    }

    #[test]
    fn category_serde_matches_strum() {
        for category in Category::iter() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
        }
    }

    #[test]
    fn unknown_category_is_rejected() {
        assert!("FRIDGES".parse::<Category>().is_err());
        assert!(serde_json::from_str::<Category>("\"tv\"").is_err());
    }
}
