//! Raw wire types for `/get_stadium_structure` — serde shapes for deserializing the payload.
//! These map to the clean domain types via the From impls in lib.rs.
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StructureResponse {
    pub zonas: Vec<ZoneEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ZoneEntry {
    pub nombre: String,
    pub categorias: CategoryMap,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeatEntry {
    pub estado: String,
}

/// JSON object of category name → rows, in the order a browser's `Object.entries` yields them:
/// integer-like keys first in ascending order, then the rest in document order. A repeated key
/// keeps its first position and its last value.
#[derive(Debug, Default, Clone)]
pub struct CategoryMap(pub Vec<(String, Vec<Vec<SeatEntry>>)>);

impl<'de> Deserialize<'de> for CategoryMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoryMapVisitor;

        impl<'de> Visitor<'de> for CategoryMapVisitor {
            type Value = CategoryMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to rows of seats")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries: Vec<(String, Vec<Vec<SeatEntry>>)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, rows)) = access.next_entry::<String, _>()? {
                    match entries.iter_mut().find(|(existing, _)| *existing == name) {
                        Some(entry) => entry.1 = rows,
                        None => entries.push((name, rows)),
                    }
                }
                // Stable: non-index keys keep their relative order.
                entries.sort_by_key(|(name, _)| array_index(name).map_or((1, 0), |i| (0, i)));
                Ok(CategoryMap(entries))
            }
        }

        deserializer.deserialize_map(CategoryMapVisitor)
    }
}

/// Canonical array index (`"0"`, `"17"`, not `"007"` or `"-1"`), as JavaScript property order
/// defines it.
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}
