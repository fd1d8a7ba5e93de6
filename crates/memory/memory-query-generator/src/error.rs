use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryGeneratorError {
    #[error("Unsupported memory query generator: {0}")]
    UnsupportedGeneratorKind(String),

    #[error("LLM query generator needs {0}")]
    MissingDependency(&'static str),

    #[error("Template render error: {0}")]
    TemplateRender(#[from] minijinja::Error),

    #[error(transparent)]
    Inference(anyhow::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QueryGeneratorError>;
