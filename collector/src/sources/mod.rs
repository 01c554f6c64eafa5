pub mod headhunter;
pub mod superjob;

pub use headhunter::{HeadHunter, HeadHunterParams};
pub use superjob::{SuperJob, SuperJobParams};
