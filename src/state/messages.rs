use stadium_api::StadiumStructure;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkRequest {
    LoadStructure,
}

#[derive(Debug, PartialEq, Eq)]
pub enum NetworkResponse {
    /// `structure` is `None` when the server answered with a falsy document.
    StructureLoaded { structure: Option<StadiumStructure> },
    Error { message: String },
}
