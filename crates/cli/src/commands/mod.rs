mod bump;
mod init;
mod publish;
mod show;

pub use bump::BumpArgs;
pub use bump::handle_bump;
pub use init::InitArgs;
pub use init::handle_init;
pub use publish::PublishArgs;
pub use publish::handle_publish;
pub use show::ShowArgs;
pub use show::handle_show;
