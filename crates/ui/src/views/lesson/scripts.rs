/// Read `text` aloud with the platform's Japanese voice, if speech synthesis exists.
pub(super) fn speak_script(text: &str) -> String {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_owned());
    format!(
        r#"(function() {{
            if (!window.speechSynthesis) return;
            window.speechSynthesis.cancel();
            const utterance = new SpeechSynthesisUtterance({literal});
            utterance.lang = "ja-JP";
            window.speechSynthesis.speak(utterance);
        }})();"#,
    )
}
