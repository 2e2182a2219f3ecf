mod app;
mod certification_grid;
mod comment_board;
mod comment_list;
mod contact_form;
mod project_grid;
mod skill_grid;
mod timeline;

pub use app::App;
pub use certification_grid::CertificationGrid;
pub use comment_board::CommentBoard;
pub use comment_list::CommentList;
pub use contact_form::ContactForm;
pub use project_grid::ProjectGrid;
pub use skill_grid::SkillGrid;
pub use timeline::Timeline;
