use serde::Serialize;

use crate::store::RecordStore;
use crate::utils::AppError;

/// Agregado por aluno: cursos, notas e GPA.
/// O join usa o id numérico do aluno como identidade canônica — a lista
/// `students` dos cursos é texto livre e fica fora do join.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct StudentReport {
    pub student_id: i64,
    pub name: String,

    /// Nomes dos cursos referenciados pelas notas do aluno
    pub courses: Vec<String>,

    /// Valores das notas, em ordem de inserção
    pub grades: Vec<f64>,

    /// Média aritmética das notas; `null` quando o aluno não tem nenhuma
    pub gpa: Option<f64>,
}

/// Monta o relatório de um aluno juntando grades → courses via course_id.
/// Notas cujo course_id não resolve para curso nenhum contam para o GPA,
/// mas não aparecem na lista de cursos (não há integridade referencial).
pub fn student_report(store: &RecordStore, student_id: i64) -> Result<StudentReport, AppError> {
    let student = store.get_student(student_id)?;
    let grades = store.grades_for_student(student_id);

    let mut seen_course_ids = Vec::new();
    let mut courses = Vec::new();
    for grade in &grades {
        if seen_course_ids.contains(&grade.course_id) {
            continue;
        }
        seen_course_ids.push(grade.course_id);
        if let Ok(course) = store.get_course(grade.course_id) {
            courses.push(course.name);
        }
    }

    let values: Vec<f64> = grades.iter().map(|g| g.grade).collect();
    let gpa = if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    };

    Ok(StudentReport {
        student_id,
        name: student.name,
        courses,
        grades: values,
        gpa,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Grade, StudentPayload};

    fn store_with_student() -> RecordStore {
        let store = RecordStore::new();
        store.create_student(StudentPayload {
            name: "John".to_string(),
            age: 18,
            email: "john@example.com".to_string(),
        });
        store
    }

    #[test]
    fn gpa_is_none_when_student_has_no_grades() {
        let store = store_with_student();
        let report = student_report(&store, 1).unwrap();

        assert!(report.grades.is_empty());
        assert!(report.courses.is_empty());
        assert_eq!(report.gpa, None);
    }

    #[test]
    fn gpa_is_arithmetic_mean_of_grade_values() {
        let store = store_with_student();
        store.create_course(Course {
            id: 1,
            name: "Soil Science".to_string(),
            teacher: "Professor Kamal M.".to_string(),
            students: vec![],
        });
        store.add_grade(Grade { student_id: 1, course_id: 1, grade: 90.0 });
        store.add_grade(Grade { student_id: 1, course_id: 1, grade: 80.0 });
        // nota de outro aluno não entra
        store.add_grade(Grade { student_id: 2, course_id: 1, grade: 10.0 });

        let report = student_report(&store, 1).unwrap();
        assert_eq!(report.grades, vec![90.0, 80.0]);
        assert_eq!(report.gpa, Some(85.0));
        // duas notas no mesmo curso: o curso aparece uma vez só
        assert_eq!(report.courses, vec!["Soil Science".to_string()]);
    }

    #[test]
    fn unresolvable_course_id_still_counts_for_gpa() {
        let store = store_with_student();
        store.add_grade(Grade { student_id: 1, course_id: 42, grade: 70.0 });

        let report = student_report(&store, 1).unwrap();
        assert!(report.courses.is_empty());
        assert_eq!(report.gpa, Some(70.0));
    }

    #[test]
    fn report_for_unknown_student_is_not_found() {
        let store = RecordStore::new();
        assert!(student_report(&store, 5).is_err());
    }
}
