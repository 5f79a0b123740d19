use crate::state::view_state::ViewState;
use crate::ui::html::Node;
use stadium_api::{Category, StadiumStructure, Zone};

pub const LOADING_TEXT: &str = "Cargando...";
pub const NO_DATA_TEXT: &str = "No hay datos disponibles";
const TITLE: &str = "Estructura del Estadio";

/// Pure projection of the view state onto a rendered tree.
pub fn draw(state: &ViewState) -> Node {
    if state.loading {
        return Node::text_element("div", LOADING_TEXT);
    }
    if let Some(message) = state.error.as_deref() {
        return Node::text_element("div", format!("Error: {message}"));
    }
    match &state.data {
        Some(structure) => draw_structure(structure),
        None => Node::text_element("div", NO_DATA_TEXT),
    }
}

fn draw_structure(structure: &StadiumStructure) -> Node {
    Node::element(
        "div",
        vec![
            Node::text_element("h1", TITLE),
            Node::element("div", structure.zonas.iter().map(draw_zone).collect()),
        ],
    )
}

fn draw_zone(zone: &Zone) -> Node {
    let mut children = vec![Node::text_element("h2", format!("Zona: {}", zone.nombre))];
    children.extend(zone.categorias.iter().map(draw_category));
    Node::element("div", children)
}

fn draw_category(category: &Category) -> Node {
    let mut children = vec![Node::text_element("h3", format!("Categoría: {}", category.nombre))];
    children.extend(category.filas.iter().enumerate().map(|(i, fila)| {
        let estados: Vec<&str> = fila.iter().map(|seat| seat.estado.as_str()).collect();
        Node::element(
            "div",
            vec![Node::text_element("p", format!("Fila {}: {}", i + 1, estados.join(", ")))],
        )
    }));
    Node::element("div", children)
}
