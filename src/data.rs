// src/data.rs

use crate::error::ParseError;
use crate::model::{Category, Question};
use std::path::Path;

/// Carga el banco de preguntas de una categoría desde su fichero plano
pub fn load_category(dir: &Path, category: Category) -> Result<Vec<Question>, ParseError> {
    let path = dir.join(category.file_name());
    let text = std::fs::read_to_string(&path).map_err(|source| ParseError::Io {
        path: path.clone(),
        source,
    })?;
    parse_questions(&text)
}

/// Parsea el formato plano: cada 3 líneas no vacías forman un registro
/// (enunciado / opciones separadas por `|` / respuesta correcta literal).
///
/// Las líneas en blanco se filtran antes de agrupar, así un blanco dentro
/// de un registro no desplaza la alineación. Un grupo final incompleto
/// (1 o 2 líneas sueltas) se descarta en silencio.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, ParseError> {
    // Conservamos el número de línea original para los mensajes de error
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let mut questions = Vec::new();
    for group in lines.chunks_exact(3) {
        let (line_no, prompt) = group[0];
        let options: Vec<String> = group[1]
            .1
            .split('|')
            .map(|opt| opt.trim().to_string())
            .collect();
        let answer = group[2].1.to_string();

        if options.len() < 2 {
            return Err(ParseError::TooFewOptions { line_no });
        }
        // La respuesta tiene que ser miembro de las opciones
        if !options.iter().any(|opt| *opt == answer) {
            return Err(ParseError::AnswerNotInOptions { line_no, answer });
        }

        questions.push(Question {
            prompt: prompt.to_string(),
            options,
            answer,
        });
    }

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_groups_of_three_in_order() {
        let text = "\
¿Capital de Francia?
París | Londres
París
¿2 + 2?
3 | 4 | 5
4
";
        let questions = parse_questions(text).expect("parse ok");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "¿Capital de Francia?");
        assert_eq!(questions[0].options, vec!["París", "Londres"]);
        assert_eq!(questions[1].answer, "4");
    }

    #[test]
    fn trailing_partial_group_is_dropped_silently() {
        let text = "P1\nA | B\nA\nsobrante sin opciones\n";
        let questions = parse_questions(text).expect("parse ok");
        assert_eq!(questions.len(), 1);

        let text = "P1\nA | B\nA\nsobrante\nA | B\n";
        let questions = parse_questions(text).expect("parse ok");
        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn blank_lines_do_not_shift_grouping() {
        let text = "\nP1\n\n   \nA | B\n\nB\n\n";
        let questions = parse_questions(text).expect("parse ok");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].answer, "B");
    }

    #[test]
    fn options_are_split_on_pipe_and_trimmed() {
        let text = "P1\n  rojo |verde|  azul  \nverde\n";
        let questions = parse_questions(text).expect("parse ok");
        assert_eq!(questions[0].options, vec!["rojo", "verde", "azul"]);
    }

    #[test]
    fn single_option_is_rejected() {
        let text = "P1\nsolo una\nsolo una\n";
        let err = parse_questions(text).unwrap_err();
        assert!(matches!(err, ParseError::TooFewOptions { line_no: 1 }));
    }

    #[test]
    fn answer_must_be_member_of_options() {
        let text = "P1\nA | B\nC\n";
        let err = parse_questions(text).unwrap_err();
        match err {
            ParseError::AnswerNotInOptions { line_no, answer } => {
                assert_eq!(line_no, 1);
                assert_eq!(answer, "C");
            }
            other => panic!("esperaba AnswerNotInOptions, no {other:?}"),
        }
    }

    #[test]
    fn well_formed_input_of_3k_lines_yields_k_questions() {
        let mut text = String::new();
        for i in 0..20 {
            text.push_str(&format!("Pregunta {i}\nsí | no\nsí\n"));
        }
        let questions = parse_questions(&text).expect("parse ok");
        assert_eq!(questions.len(), 20);
        assert_eq!(questions[7].prompt, "Pregunta 7");
    }
}
