/// A line of user input, interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Plain text, searched as typed
    Search(String),
    ShowLetters,
    Letter(String),
    /// 1-based position in the current list
    Show(usize),
    Define(String),
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
  <text>        search words containing <text>
  :letters      show the letter filter
  :letter <L>   words starting with <L>
  :show <N>     definition of the N-th listed word
  :def <word>   definition of <word>
  :help         this help
  :quit         exit
  ::<text>      search for text starting with ':'";

pub fn parse_command(line: &str) -> UiCommand {
    let Some(rest) = line.strip_prefix(':') else {
        return UiCommand::Search(line.to_string());
    };

    if rest.starts_with(':') {
        return UiCommand::Search(rest.to_string());
    }

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest.trim(), ""),
    };

    match (name, arg) {
        ("letters" | "filter", "") => UiCommand::ShowLetters,
        ("letter" | "l", letter) if !letter.is_empty() => UiCommand::Letter(letter.to_string()),
        ("show" | "s", n) => match n.parse::<usize>() {
            Ok(n) if n > 0 => UiCommand::Show(n),
            _ => UiCommand::Unknown(line.to_string()),
        },
        ("def" | "d", word) if !word.is_empty() => UiCommand::Define(word.to_string()),
        ("help" | "h", _) => UiCommand::Help,
        ("quit" | "q" | "exit", _) => UiCommand::Quit,
        _ => UiCommand::Unknown(line.to_string()),
    }
}
