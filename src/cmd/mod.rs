pub mod add;
pub mod code;
pub mod delete;
pub mod generate;
pub mod list;

pub enum CommandType {
    Code,
    Add,
    Delete,
    List,
    Generate,
}

impl CommandType {
    pub fn as_str(&self) -> &str {
        match self {
            CommandType::Code => "code",
            CommandType::Add => "add",
            CommandType::Delete => "delete",
            CommandType::List => "list",
            CommandType::Generate => "generate",
        }
    }
}
