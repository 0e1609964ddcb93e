//! Static English/Marathi label dictionary

use crate::messages::ui_events::Tab;
use crate::content::{Locale, QuizCategory};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    AppTitle,
    Subtitle,
    Welcome,
    WelcomeDesc,
    TotalProgress,
    LessonsCompleted,
    Level,
    Duration,
    Lessons,
    WatchVideo,
    QuestionOf,
    Correct,
    Incorrect,
    NextQuestion,
    QuizComplete,
    YouScored,
    PerfectScore,
    KeepLearning,
    TryAgain,
    SelectBuddy,
    TypeMessage,
    Online,
    Offline,
    Typing,
    YourBuddies,
    LoginAsStudent,
    LoginAsTeacher,
    Email,
    Password,
    LoginBtn,
    Logout,
    TotalStudents,
    AverageProgress,
    AverageQuizScore,
    TopPerformers,
    NeedsAttention,
    SearchStudent,
    NoStudents,
    AllDoingWell,
    CourseCreated,
    QuizCreated,
    FillCourseFields,
    FillQuizFields,
    CorrectOptionEmpty,
}

pub fn label(locale: Locale, label: Label) -> &'static str {
    use Label::*;
    match locale {
        Locale::En => match label {
            AppTitle => "SignLearn",
            Subtitle => "Accessible Learning for Deaf and Mute People",
            Welcome => "Welcome to SignLearn",
            WelcomeDesc => "Video lessons, quizzes and study buddies for sign-language learners.",
            TotalProgress => "Total Progress",
            LessonsCompleted => "Lessons Completed",
            Level => "Level",
            Duration => "Duration",
            Lessons => "Lessons",
            WatchVideo => "Watch Video",
            QuestionOf => "Question",
            Correct => "Correct!",
            Incorrect => "Try Again",
            NextQuestion => "Next Question",
            QuizComplete => "Quiz Complete!",
            YouScored => "You scored",
            PerfectScore => "Perfect Score!",
            KeepLearning => "Keep Learning!",
            TryAgain => "Try Again",
            SelectBuddy => "Select a buddy to chat",
            TypeMessage => "Type your message...",
            Online => "Online",
            Offline => "Offline",
            Typing => "typing...",
            YourBuddies => "Your Buddies",
            LoginAsStudent => "Login as Student",
            LoginAsTeacher => "Login as Teacher",
            Email => "Email",
            Password => "Password",
            LoginBtn => "Login",
            Logout => "Logout",
            TotalStudents => "Total Students",
            AverageProgress => "Average Progress",
            AverageQuizScore => "Average Quiz Score",
            TopPerformers => "Top Performers",
            NeedsAttention => "Needs Attention",
            SearchStudent => "Search students...",
            NoStudents => "No students found",
            AllDoingWell => "All students are doing well!",
            CourseCreated => "Course created successfully!",
            QuizCreated => "Quiz created successfully!",
            FillCourseFields => "Please fill in all required fields",
            FillQuizFields => "Please fill in the question and at least one option",
            CorrectOptionEmpty => "The option marked correct is empty",
        },
        Locale::Mr => match label {
            AppTitle => "SignLearn",
            Subtitle => "बधिर आणि मूक व्यक्तींसाठी सुलभ शिक्षण",
            Welcome => "स्वागत आहे",
            WelcomeDesc => "व्हिडिओ धडे, क्विझ आणि अभ्यास मित्र.",
            TotalProgress => "एकूण प्रगती",
            LessonsCompleted => "पूर्ण झालेले धडे",
            Level => "पातळी",
            Duration => "कालावधी",
            Lessons => "धडे",
            WatchVideo => "व्हिडिओ पहा",
            QuestionOf => "प्रश्न",
            Correct => "बरोबर!",
            Incorrect => "पुन्हा प्रयत्न करा",
            NextQuestion => "पुढील प्रश्न",
            QuizComplete => "क्विझ पूर्ण!",
            YouScored => "तुम्ही मिळवले",
            PerfectScore => "अत्यंत गुण!",
            KeepLearning => "शिकणे सुरू ठेवा!",
            TryAgain => "पुन्हा प्रयत्न करा",
            SelectBuddy => "चॅट करण्यासाठी मित्र निवडा",
            TypeMessage => "तुमचा संदेश टाइप करा...",
            Online => "ऑनलाइन",
            Offline => "ऑफलाइन",
            Typing => "टाइप करत आहे...",
            YourBuddies => "तुमचे मित्र",
            LoginAsStudent => "विद्यार्थी म्हणून लॉगिन",
            LoginAsTeacher => "शिक्षक म्हणून लॉगिन",
            Email => "ईमेल",
            Password => "पासवर्ड",
            LoginBtn => "लॉगिन",
            Logout => "लॉगआउट",
            TotalStudents => "एकूण विद्यार्थी",
            AverageProgress => "सरासरी प्रगती",
            AverageQuizScore => "सरासरी क्विझ गुण",
            TopPerformers => "उत्कृष्ट विद्यार्थी",
            NeedsAttention => "लक्ष आवश्यक",
            SearchStudent => "विद्यार्थी शोधा...",
            NoStudents => "विद्यार्थी सापडले नाहीत",
            AllDoingWell => "सर्व विद्यार्थी चांगले करत आहेत!",
            CourseCreated => "अभ्यासक्रम तयार झाला!",
            QuizCreated => "क्विझ तयार झाले!",
            FillCourseFields => "कृपया सर्व आवश्यक माहिती भरा",
            FillQuizFields => "कृपया प्रश्न आणि किमान एक पर्याय भरा",
            CorrectOptionEmpty => "बरोबर म्हणून निवडलेला पर्याय रिकामा आहे",
        },
    }
}

pub fn tab_name(locale: Locale, tab: Tab) -> &'static str {
    match (locale, tab) {
        (Locale::En, Tab::Home) => "Home",
        (Locale::En, Tab::Courses) => "Courses",
        (Locale::En, Tab::SignLanguage) => "Sign Language",
        (Locale::En, Tab::Quiz) => "Quiz",
        (Locale::En, Tab::Vocabulary) => "Vocabulary",
        (Locale::En, Tab::Progress) => "Progress",
        (Locale::En, Tab::TeacherDashboard) => "Teacher Dashboard",
        (Locale::En, Tab::BuddyChat) => "Study Buddies",
        (Locale::En, Tab::Login) => "Login",
        (Locale::Mr, Tab::Home) => "मुख्यपृष्ठ",
        (Locale::Mr, Tab::Courses) => "अभ्यासक्रम",
        (Locale::Mr, Tab::SignLanguage) => "सांकेतिक भाषा",
        (Locale::Mr, Tab::Quiz) => "क्विझ",
        (Locale::Mr, Tab::Vocabulary) => "शब्दकोश",
        (Locale::Mr, Tab::Progress) => "प्रगती",
        (Locale::Mr, Tab::TeacherDashboard) => "शिक्षक डॅशबोर्ड",
        (Locale::Mr, Tab::BuddyChat) => "अभ्यास मित्र",
        (Locale::Mr, Tab::Login) => "लॉगिन",
    }
}

pub fn category_name(locale: Locale, category: QuizCategory) -> &'static str {
    match (locale, category) {
        (Locale::En, QuizCategory::Basics) => "Basics",
        (Locale::En, QuizCategory::Numbers) => "Numbers",
        (Locale::En, QuizCategory::Emotions) => "Emotions",
        (Locale::En, QuizCategory::DailyLife) => "Daily Life",
        (Locale::En, QuizCategory::Intermediate) => "Intermediate",
        (Locale::En, QuizCategory::Advanced) => "Advanced",
        (Locale::En, QuizCategory::Marathi) => "Marathi",
        (Locale::En, QuizCategory::Practical) => "Practical Signs",
        (Locale::Mr, QuizCategory::Basics) => "मूलभूत",
        (Locale::Mr, QuizCategory::Numbers) => "अंक",
        (Locale::Mr, QuizCategory::Emotions) => "भावना",
        (Locale::Mr, QuizCategory::DailyLife) => "दैनंदिन जीवन",
        (Locale::Mr, QuizCategory::Intermediate) => "मध्यम",
        (Locale::Mr, QuizCategory::Advanced) => "प्रगत",
        (Locale::Mr, QuizCategory::Marathi) => "मराठी",
        (Locale::Mr, QuizCategory::Practical) => "व्यावहारिक संकेत",
    }
}
