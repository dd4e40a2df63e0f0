use serde::{Deserialize, Serialize};

/// Aluno cadastrado no sistema (armazenado em memória)
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Student {
    /// ID atribuído pelo servidor: tamanho da coleção + 1
    pub id: i64,

    pub name: String,

    pub age: u32,

    pub email: String,
}

/// Payload de criação/substituição de aluno.
/// Um `id` enviado pelo cliente é ignorado — o servidor sempre atribui o seu.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct StudentPayload {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl StudentPayload {
    pub fn into_student(self, id: i64) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}
