mod layout;
mod project_card;
mod tech_badge;

pub use layout::Layout;
pub use project_card::ProjectCard;
pub use tech_badge::TechBadge;
