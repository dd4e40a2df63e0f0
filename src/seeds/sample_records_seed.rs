use crate::models::{Course, Grade, StudentPayload};
use crate::store::RecordStore;

/// Carga inicial de demonstração: 2 alunos, 2 cursos e 6 notas.
/// Pensada para um store recém-criado; as notas incluem referências
/// penduradas de propósito (student_id 3, course_id 3 não existem).
pub fn seed_sample_records(store: &RecordStore) {
    log::info!("🌱 Seeding sample records...");

    store.create_student(StudentPayload {
        name: "John".to_string(),
        age: 18,
        email: "john@example.com".to_string(),
    });
    store.create_student(StudentPayload {
        name: "Jane".to_string(),
        age: 19,
        email: "jane@example.com".to_string(),
    });

    store.create_course(Course {
        id: 1,
        name: "Soil Science".to_string(),
        teacher: "Professor Kamal M.".to_string(),
        students: vec![
            "Musa".to_string(),
            "Audu".to_string(),
            "Gerrard".to_string(),
            "Lucy".to_string(),
        ],
    });
    store.create_course(Course {
        id: 2,
        name: "Intro to Programming".to_string(),
        teacher: "Professor Caleb".to_string(),
        students: vec![
            "Maryam".to_string(),
            "Joseph".to_string(),
            "Abiola".to_string(),
        ],
    });

    let grades = [
        (1, 1, 90.0),
        (2, 1, 85.0),
        (2, 2, 92.0),
        (3, 2, 88.0),
        (1, 3, 91.0),
        (3, 3, 95.0),
    ];
    for (student_id, course_id, grade) in grades {
        store.add_grade(Grade { student_id, course_id, grade });
    }

    log::info!(
        "✅ Seeded {} students, {} courses, {} grades",
        store.list_students().len(),
        store.list_courses().len(),
        store.list_grades().len()
    );
}
