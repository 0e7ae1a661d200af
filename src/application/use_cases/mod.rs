/// Use cases module containing application business logic orchestration
mod summarize_resources;

pub use summarize_resources::SummarizeResourcesUseCase;
