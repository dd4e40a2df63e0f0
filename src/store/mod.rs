use std::sync::{Mutex, MutexGuard};

use crate::models::{Course, Grade, Student, StudentPayload, UpdateCourseRequest};
use crate::utils::AppError;

/// "Banco de dados" em memória: três coleções ordenadas, um mutex por coleção.
/// Todo o estado vive no processo — reinício zera tudo.
pub struct RecordStore {
    students: Mutex<Vec<Student>>,
    courses: Mutex<Vec<Course>>,
    grades: Mutex<Vec<Grade>>,
}

// Lock poisoning só acontece se um handler entrar em pânico segurando o guard;
// nesse caso os dados ainda são utilizáveis, então recuperamos o guard.
fn lock<T>(collection: &Mutex<T>) -> MutexGuard<'_, T> {
    collection.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            students: Mutex::new(Vec::new()),
            courses: Mutex::new(Vec::new()),
            grades: Mutex::new(Vec::new()),
        }
    }

    // ==================== STUDENTS ====================

    /// Lista todos os alunos em ordem de inserção
    pub fn list_students(&self) -> Vec<Student> {
        lock(&self.students).clone()
    }

    pub fn get_student(&self, id: i64) -> Result<Student, AppError> {
        lock(&self.students)
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))
    }

    /// Cria um aluno com id = tamanho atual + 1.
    /// Após deleções o id pode colidir com um existente — defeito conhecido
    /// e assumido.
    pub fn create_student(&self, payload: StudentPayload) -> Student {
        let mut students = lock(&self.students);
        let student = payload.into_student(students.len() as i64 + 1);
        students.push(student.clone());
        student
    }

    /// Substituição completa: remove o registro antigo e anexa o novo no fim.
    /// A ordem de inserção NÃO é preservada através de updates.
    pub fn replace_student(&self, id: i64, payload: StudentPayload) -> Result<Student, AppError> {
        let mut students = lock(&self.students);
        let position = students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))?;

        students.remove(position);
        let updated = payload.into_student(id);
        students.push(updated.clone());
        Ok(updated)
    }

    pub fn delete_student(&self, id: i64) -> Result<(), AppError> {
        let mut students = lock(&self.students);
        let position = students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Student {} not found", id)))?;

        students.remove(position);
        Ok(())
    }

    // ==================== COURSES ====================

    pub fn list_courses(&self) -> Vec<Course> {
        lock(&self.courses).clone()
    }

    pub fn get_course(&self, id: i64) -> Result<Course, AppError> {
        lock(&self.courses)
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))
    }

    /// Registra um curso com o id fornecido pelo cliente, sem checar colisão
    pub fn create_course(&self, course: Course) -> Course {
        lock(&self.courses).push(course.clone());
        course
    }

    /// Merge parcial: só os campos presentes no request sobrescrevem o registro
    pub fn merge_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Course, AppError> {
        let mut courses = lock(&self.courses);
        let course = courses
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))?;

        if let Some(name) = update.name {
            course.name = name;
        }
        if let Some(teacher) = update.teacher {
            course.teacher = teacher;
        }
        if let Some(students) = update.students {
            course.students = students;
        }

        Ok(course.clone())
    }

    pub fn delete_course(&self, id: i64) -> Result<(), AppError> {
        let mut courses = lock(&self.courses);
        let position = courses
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", id)))?;

        courses.remove(position);
        Ok(())
    }

    /// Lista de nomes de alunos matriculados em um curso (texto livre)
    pub fn course_students(&self, id: i64) -> Result<Vec<String>, AppError> {
        self.get_course(id).map(|course| course.students)
    }

    // ==================== GRADES ====================

    pub fn list_grades(&self) -> Vec<Grade> {
        lock(&self.grades).clone()
    }

    /// Append-only — não há update nem delete de notas
    pub fn add_grade(&self, grade: Grade) -> Grade {
        lock(&self.grades).push(grade.clone());
        grade
    }

    /// Notas de um aluno, em ordem de inserção. Lista vazia se não houver —
    /// um student_id inexistente não é erro aqui.
    pub fn grades_for_student(&self, student_id: i64) -> Vec<Grade> {
        lock(&self.grades)
            .iter()
            .filter(|g| g.student_id == student_id)
            .cloned()
            .collect()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str) -> StudentPayload {
        StudentPayload {
            name: name.to_string(),
            age: 20,
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    #[test]
    fn create_student_assigns_sequential_ids() {
        let store = RecordStore::new();
        assert_eq!(store.create_student(payload("John")).id, 1);
        assert_eq!(store.create_student(payload("Jane")).id, 2);
        assert_eq!(store.list_students().len(), 2);
    }

    #[test]
    fn student_ids_can_collide_after_delete() {
        let store = RecordStore::new();
        store.create_student(payload("John"));
        store.create_student(payload("Jane"));
        store.delete_student(1).unwrap();

        // len + 1 == 2, que já existe — comportamento documentado
        let sam = store.create_student(payload("Sam"));
        assert_eq!(sam.id, 2);
    }

    #[test]
    fn get_student_not_found() {
        let store = RecordStore::new();
        let err = store.get_student(99).unwrap_err();
        assert_eq!(err, AppError::NotFound("Student 99 not found".to_string()));
    }

    #[test]
    fn replace_student_moves_record_to_end() {
        let store = RecordStore::new();
        store.create_student(payload("John"));
        store.create_student(payload("Jane"));

        let replaced = store.replace_student(1, payload("Johnny")).unwrap();
        assert_eq!(replaced.id, 1);

        let students = store.list_students();
        assert_eq!(students[0].name, "Jane");
        assert_eq!(students[1].name, "Johnny");
        assert_eq!(students[1].id, 1);
    }

    #[test]
    fn delete_student_removes_from_list() {
        let store = RecordStore::new();
        store.create_student(payload("John"));
        store.create_student(payload("Jane"));

        store.delete_student(1).unwrap();
        assert!(store.get_student(1).is_err());
        assert!(store.list_students().iter().all(|s| s.id != 1));
        assert_eq!(store.list_students().len(), 1);

        // Segundo delete do mesmo id: NotFound
        assert!(store.delete_student(1).is_err());
    }

    #[test]
    fn create_course_keeps_client_id_without_collision_check() {
        let store = RecordStore::new();
        store.create_course(Course {
            id: 7,
            name: "Soil Science".to_string(),
            teacher: "Professor Kamal M.".to_string(),
            students: vec![],
        });
        store.create_course(Course {
            id: 7,
            name: "Duplicate".to_string(),
            teacher: "Professor Caleb".to_string(),
            students: vec![],
        });

        assert_eq!(store.list_courses().len(), 2);
        // Get retorna o primeiro registro com o id
        assert_eq!(store.get_course(7).unwrap().name, "Soil Science");
    }

    #[test]
    fn merge_course_keeps_unsupplied_fields() {
        let store = RecordStore::new();
        store.create_course(Course {
            id: 1,
            name: "Soil Science".to_string(),
            teacher: "Professor Kamal M.".to_string(),
            students: vec!["Musa".to_string()],
        });

        let merged = store
            .merge_course(
                1,
                UpdateCourseRequest {
                    name: None,
                    teacher: Some("Professor Caleb".to_string()),
                    students: None,
                },
            )
            .unwrap();

        assert_eq!(merged.name, "Soil Science");
        assert_eq!(merged.teacher, "Professor Caleb");
        assert_eq!(merged.students, vec!["Musa".to_string()]);
    }

    #[test]
    fn grades_are_append_only_and_filterable() {
        let store = RecordStore::new();
        store.add_grade(Grade { student_id: 1, course_id: 1, grade: 90.0 });
        store.add_grade(Grade { student_id: 2, course_id: 1, grade: 85.0 });
        store.add_grade(Grade { student_id: 1, course_id: 2, grade: 91.0 });

        let for_one = store.grades_for_student(1);
        assert_eq!(for_one.len(), 2);
        assert_eq!(for_one[0].grade, 90.0);
        assert_eq!(for_one[1].grade, 91.0);

        assert!(store.grades_for_student(42).is_empty());
        assert_eq!(store.list_grades().len(), 3);
    }
}
