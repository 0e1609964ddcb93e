//! Mock identity - no credential verification takes place

const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Student,
    Teacher,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }

    pub fn toggle(&self) -> Role {
        match self {
            Role::Student => Role::Teacher,
            Role::Teacher => Role::Student,
        }
    }
}

/// The fabricated logged-in user
#[derive(Clone, Debug, PartialEq)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub avatar: String,
    pub progress: u8,
    pub level: String,
    pub total_quiz_score: u32,
    pub lessons_completed: u32,
    pub last_active: String,
}

impl SessionUser {
    /// Always succeeds. The password is accepted and discarded.
    pub fn login(email: &str, _password: &str, role: Role) -> Self {
        let (name, progress, level, total_quiz_score, lessons_completed) = match role {
            Role::Student => ("Student User", 65, "Intermediate", 78, 25),
            Role::Teacher => ("Teacher User", 85, "Advanced", 92, 38),
        };
        SessionUser {
            id: String::from("1"),
            name: name.to_string(),
            email: email.to_string(),
            role,
            avatar: format!("{}{}", AVATAR_BASE, email),
            progress,
            level: level.to_string(),
            total_quiz_score,
            lessons_completed,
            last_active: String::from("Now"),
        }
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }
}

/// Focused field on the login screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Role,
}

impl LoginField {
    pub fn next(&self) -> LoginField {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Role,
            LoginField::Role => LoginField::Email,
        }
    }

    pub fn prev(&self) -> LoginField {
        match self {
            LoginField::Email => LoginField::Role,
            LoginField::Password => LoginField::Email,
            LoginField::Role => LoginField::Password,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub field: LoginField,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_login_stats() {
        let user = SessionUser::login("a@b.com", "", Role::Student);
        assert_eq!(user.name, "Student User");
        assert_eq!(user.progress, 65);
        assert_eq!(user.level, "Intermediate");
        assert_eq!(user.total_quiz_score, 78);
        assert_eq!(user.lessons_completed, 25);
        assert!(!user.is_teacher());
    }

    #[test]
    fn test_teacher_login_stats() {
        let user = SessionUser::login("x@y.com", "pw", Role::Teacher);
        assert_eq!(user.name, "Teacher User");
        assert_eq!(user.email, "x@y.com");
        assert_eq!(user.avatar, format!("{}x@y.com", AVATAR_BASE));
        assert_eq!((user.progress, user.total_quiz_score, user.lessons_completed), (85, 92, 38));
        assert!(user.is_teacher());
    }

    #[test]
    fn test_login_field_cycle() {
        let field = LoginField::default();
        assert_eq!(field.next().next().next(), field);
        assert_eq!(field.prev(), LoginField::Role);
    }
}
