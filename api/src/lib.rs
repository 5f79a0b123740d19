pub mod client;
pub mod wire;

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the endpoint's wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StadiumStructure {
    pub zonas: Vec<Zone>,
}

impl StadiumStructure {
    /// Total number of seats across every zone and category.
    pub fn seat_count(&self) -> usize {
        self.zonas.iter().map(Zone::seat_count).sum()
    }
}

/// A named physical section of the stadium.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zone {
    pub nombre: String,
    /// Kept in the order the endpoint sent them.
    pub categorias: Vec<Category>,
}

impl Zone {
    pub fn seat_count(&self) -> usize {
        self.categorias
            .iter()
            .flat_map(|c| c.filas.iter())
            .map(Vec::len)
            .sum()
    }

    /// Number of seats per status label. Labels are counted verbatim, never interpreted.
    pub fn state_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for seat in self.categorias.iter().flat_map(|c| c.filas.iter()).flatten() {
            *counts.entry(seat.estado.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

/// A pricing/seating tier within a zone ("VIP", "Platea", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Category {
    pub nombre: String,
    pub filas: Vec<Row>,
}

pub type Row = Vec<Seat>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    /// Opaque status label ("Libre", "Comprado", ...), passed through unmodified.
    pub estado: String,
}

impl From<wire::StructureResponse> for StadiumStructure {
    fn from(raw: wire::StructureResponse) -> Self {
        Self { zonas: raw.zonas.into_iter().map(Zone::from).collect() }
    }
}

impl From<wire::ZoneEntry> for Zone {
    fn from(raw: wire::ZoneEntry) -> Self {
        let categorias = raw
            .categorias
            .0
            .into_iter()
            .map(|(nombre, filas)| Category {
                nombre,
                filas: filas
                    .into_iter()
                    .map(|fila| fila.into_iter().map(|s| Seat { estado: s.estado }).collect())
                    .collect(),
            })
            .collect();
        Self { nombre: raw.nombre, categorias }
    }
}

/// Decode a response body into a structure.
///
/// A falsy JSON document (`null`, `false`, `0`, `""`) decodes to `None`; anything else must
/// match the structure shape.
pub fn decode_payload(body: &[u8]) -> Result<Option<StadiumStructure>, serde_json::Error> {
    // Objects decode straight from the bytes; a `Value` round trip would sort category keys.
    if body.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'{') {
        let raw: wire::StructureResponse = serde_json::from_slice(body)?;
        return Ok(Some(raw.into()));
    }
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    let raw: wire::StructureResponse = serde_json::from_value(value)?;
    Ok(Some(raw.into()))
}

fn is_falsy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{"zonas":[{"nombre":"A","categorias":{"VIP":[[{"estado":"libre"},{"estado":"ocupado"}]]}}]}"#;

    #[test]
    fn decodes_nested_structure() {
        let structure = decode_payload(SCENARIO.as_bytes()).unwrap().unwrap();
        assert_eq!(structure.zonas.len(), 1);
        let zone = &structure.zonas[0];
        assert_eq!(zone.nombre, "A");
        assert_eq!(zone.categorias[0].nombre, "VIP");
        assert_eq!(zone.categorias[0].filas[0][1].estado, "ocupado");
        assert_eq!(structure.seat_count(), 2);
    }

    #[test]
    fn falsy_documents_decode_to_none() {
        for body in ["null", "false", "0", "\"\""] {
            assert_eq!(decode_payload(body.as_bytes()).unwrap(), None, "body {body}");
        }
    }

    #[test]
    fn truthy_document_with_wrong_shape_fails() {
        assert!(decode_payload(b"{\"zonas\":{}}").is_err());
        assert!(decode_payload(b"true").is_err());
        assert!(decode_payload(b"{\"zonas\":[{\"nombre\":\"A\",\"categorias\":[]}]}").is_err());
    }

    #[test]
    fn malformed_json_fails() {
        assert!(decode_payload(b"{\"zonas\":").is_err());
    }

    #[test]
    fn category_order_follows_the_wire() {
        let body = r#"{"zonas":[{"nombre":"B","categorias":{"Sol":[],"VIP":[],"Platea":[],"Regular":[]}}]}"#;
        let structure = decode_payload(body.as_bytes()).unwrap().unwrap();
        let names: Vec<&str> = structure.zonas[0]
            .categorias
            .iter()
            .map(|c| c.nombre.as_str())
            .collect();
        assert_eq!(names, vec!["Sol", "VIP", "Platea", "Regular"]);
    }

    #[test]
    fn category_order_survives_surrounding_whitespace() {
        let body = "\n  {\"zonas\":[{\"nombre\":\"A\",\"categorias\":{\"VIP\":[],\"Platea\":[]}}]}\n";
        let structure = decode_payload(body.as_bytes()).unwrap().unwrap();
        assert_eq!(structure.zonas[0].categorias[0].nombre, "VIP");
        assert_eq!(structure.zonas[0].categorias[1].nombre, "Platea");
    }

    #[test]
    fn state_counts_are_verbatim() {
        let body = r#"{"zonas":[{"nombre":"C","categorias":{
            "VIP":[[{"estado":"Libre"},{"estado":"Comprado"}],[{"estado":"Libre"}]],
            "Sol":[[{"estado":"reservado?"}]]}}]}"#;
        let structure = decode_payload(body.as_bytes()).unwrap().unwrap();
        let counts = structure.zonas[0].state_counts();
        assert_eq!(counts.get("Libre"), Some(&2));
        assert_eq!(counts.get("Comprado"), Some(&1));
        assert_eq!(counts.get("reservado?"), Some(&1));
        assert_eq!(structure.zonas[0].seat_count(), 4);
    }
}
