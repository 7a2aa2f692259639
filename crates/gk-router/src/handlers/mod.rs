pub mod response_builder;
pub mod setrole;
pub mod users;
pub mod whoami;
