pub mod career;
pub mod interest;
pub mod mentor;
pub mod skill;
pub mod student;
pub mod user;
