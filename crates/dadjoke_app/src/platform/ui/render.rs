use dadjoke_core::{AppViewModel, ViewStatus};

pub fn render(view: &AppViewModel) -> String {
    match &view.status {
        ViewStatus::Idle => "Idle".to_string(),
        ViewStatus::Loading => "Loading...".to_string(),
        ViewStatus::Error(message) => format!("Error: {message}"),
        ViewStatus::Joke(joke) => joke.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(status: ViewStatus) -> AppViewModel {
        AppViewModel {
            address: Some("https://icanhazdadjoke.com/".to_string()),
            status,
            dirty: true,
        }
    }

    #[test]
    fn loading_mentions_loading() {
        assert!(render(&view(ViewStatus::Loading)).contains("Loading"));
    }

    #[test]
    fn failure_includes_message() {
        let text = render(&view(ViewStatus::Error("timeout".to_string())));
        assert!(text.contains("timeout"));
        assert!(text.starts_with("Error:"));
    }

    #[test]
    fn success_is_exactly_the_joke() {
        let joke = "Why did the scarecrow win an award? He was outstanding in his field.";
        assert_eq!(render(&view(ViewStatus::Joke(joke.to_string()))), joke);
    }
}
