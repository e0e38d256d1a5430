// Completion-provider seam: free-text poems from an external model.
//
// A deployment may put a text-completion service in front of the engine. The
// service itself (HTTP, credentials, prompting) lives outside this crate;
// here it is just a `CompletionProvider` that turns a request into free text.
// `parse_completion` reads that text as a title line followed by verse lines,
// and `generate_with_fallback` uses the deterministic engine whenever the
// provider fails or answers with nothing usable.

use crate::config::VerseConfig;
use crate::error::VerseError;
use crate::form::Form;
use crate::poem::{GenerateResponse, Poem, PoemRequest, generate_poem};
use log::warn;
use verso_lang::Lexicon;

/// Scheme label for poems whose text came from a provider.
pub const PROVIDER_SCHEME: &str = "free verse (completion provider)";

/// Something that can write a poem as free text.
pub trait CompletionProvider: Send + Sync {
    fn complete(&self, request: &PoemRequest) -> Result<String, VerseError>;
}

/// Split provider text into a poem: the first non-empty line is the title,
/// the remaining non-empty lines are the verse.
pub fn parse_completion(form: Form, text: &str) -> Result<Poem, VerseError> {
    let mut lines = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty());
    let title = lines.next().ok_or(VerseError::EmptyCompletion)?.trim().to_string();
    let body: Vec<String> = lines.map(str::to_string).collect();
    if body.is_empty() {
        return Err(VerseError::EmptyCompletion);
    }
    Ok(Poem {
        title,
        form,
        scheme: PROVIDER_SCHEME.to_string(),
        lines: body,
    })
}

/// Ask `provider` for the poem, falling back to the engine on any failure.
pub fn generate_with_fallback(
    provider: Option<&dyn CompletionProvider>,
    request: &PoemRequest,
    lexicon: &Lexicon,
    config: &VerseConfig,
) -> GenerateResponse {
    if let Some(provider) = provider {
        match provider
            .complete(request)
            .and_then(|text| parse_completion(request.form, &text))
        {
            Ok(poem) => return GenerateResponse::Poem(poem),
            Err(e) => warn!("completion provider unusable ({e}), using the verse engine"),
        }
    }
    generate_poem(request, lexicon, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use verso_lang::default_lexicon;

    struct FixedText(&'static str);

    impl CompletionProvider for FixedText {
        fn complete(&self, _request: &PoemRequest) -> Result<String, VerseError> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    impl CompletionProvider for Failing {
        fn complete(&self, _request: &PoemRequest) -> Result<String, VerseError> {
            Err(VerseError::Provider("503 from upstream".to_string()))
        }
    }

    fn seeded(form: Form) -> PoemRequest {
        PoemRequest {
            topic: Some("la frontera".to_string()),
            form,
            seed: Some(42),
        }
    }

    #[test]
    fn test_parse_title_and_body() {
        let text = "\n  Cantar de la frontera  \n\nPor la sierra va el juglar,   \ncon ánimo leal.\n";
        let poem = parse_completion(Form::AssonantOctave, text).unwrap();
        assert_eq!(poem.title, "Cantar de la frontera");
        assert_eq!(
            poem.lines,
            vec!["Por la sierra va el juglar,", "con ánimo leal."]
        );
        assert_eq!(poem.scheme, PROVIDER_SCHEME);
        assert_eq!(poem.form, Form::AssonantOctave);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(matches!(
            parse_completion(Form::RhymedCouplet, "  \n \n"),
            Err(VerseError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_parse_title_only() {
        assert!(matches!(
            parse_completion(Form::RhymedCouplet, "Solo un título\n"),
            Err(VerseError::EmptyCompletion)
        ));
    }

    #[test]
    fn test_provider_text_is_used() {
        let lexicon = default_lexicon();
        let provider = FixedText("Romance\nuno\ndos");
        let response = generate_with_fallback(
            Some(&provider),
            &seeded(Form::AssonantOctave),
            &lexicon,
            &VerseConfig::default(),
        );
        let poem = response.poem().unwrap();
        assert_eq!(poem.title, "Romance");
        assert_eq!(poem.lines, vec!["uno", "dos"]);
    }

    #[test]
    fn test_failing_provider_falls_back_to_engine() {
        let lexicon = default_lexicon();
        let config = VerseConfig::default();
        let request = seeded(Form::RhymedCouplet);
        let fallback = generate_with_fallback(Some(&Failing), &request, &lexicon, &config);
        assert_eq!(fallback, generate_poem(&request, &lexicon, &config));
    }

    #[test]
    fn test_empty_provider_text_falls_back() {
        let lexicon = default_lexicon();
        let config = VerseConfig::default();
        let request = seeded(Form::MonorhymeQuatrain);
        let response = generate_with_fallback(Some(&FixedText("")), &request, &lexicon, &config);
        assert_eq!(response.poem().unwrap().lines.len(), 4);
        assert_eq!(response.poem().unwrap().scheme, "AAAA (monorhyme quatrain)");
    }

    #[test]
    fn test_no_provider_uses_engine() {
        let lexicon = default_lexicon();
        let config = VerseConfig::default();
        let request = seeded(Form::AssonantOctave);
        assert_eq!(
            generate_with_fallback(None, &request, &lexicon, &config),
            generate_poem(&request, &lexicon, &config)
        );
    }
}
