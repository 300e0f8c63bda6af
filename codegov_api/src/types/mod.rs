mod repo;
pub use self::repo::{License, Permissions, Repo, RepoAgency, RepoDates, RepoID, ReposResponse};

mod agency;
pub use self::agency::{AgenciesResponse, Agency};

mod term;
pub use self::term::{SuggestTerm, TermsResponse};

mod task;
pub use self::task::{Task, TaskAgency, TaskFeed, TasksPage};
