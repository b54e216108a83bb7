#[macro_export]
macro_rules! id_wrapper_impl {
    ($name:ident, String) => {
        impl $name {
            #[allow(dead_code)]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[allow(dead_code)]
            pub fn get(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(String::from(value))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
    ($name:ident, $value_type:ty) => {
        impl $name {
            #[allow(dead_code)]
            pub fn new(value: $value_type) -> Self {
                Self(value)
            }

            #[allow(dead_code)]
            pub fn get(&self) -> $value_type {
                self.0
            }
        }

        #[allow(dead_code)]
        impl std::str::FromStr for $name {
            type Err = <$value_type as std::str::FromStr>::Err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name(s.parse::<$value_type>()?))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

mod drop_table_database;
mod item_database;

pub use drop_table_database::{
    CreatureType, DropQuantity, DropTable, DropTableDatabase, DropTableEntry, DropTableError,
    DropTier,
};
pub use item_database::{ItemData, ItemDatabase, ItemDatabaseError, ItemId};
