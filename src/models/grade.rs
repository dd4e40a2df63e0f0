use serde::{Deserialize, Serialize};

/// Nota de um aluno em um curso. Append-only: não há update nem delete.
/// Nenhuma integridade referencial é garantida contra students/courses.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Grade {
    pub student_id: i64,

    pub course_id: i64,

    /// Valor numérico da nota (ex: 90.0)
    pub grade: f64,
}
