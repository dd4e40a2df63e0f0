use serde::{Deserialize, Serialize};

/// Curso cadastrado no sistema.
/// O `id` vem do cliente no POST — não há verificação de colisão.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Course {
    pub id: i64,

    /// Nome do curso (ex: "Soil Science")
    pub name: String,

    /// Nome do professor responsável
    pub teacher: String,

    /// Lista de nomes de alunos matriculados (texto livre, só para exibição)
    #[serde(default)]
    pub students: Vec<String>,
}

/// Request de atualização parcial de curso.
/// Campos ausentes são mantidos como estão.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub teacher: Option<String>,
    pub students: Option<Vec<String>>,
}
