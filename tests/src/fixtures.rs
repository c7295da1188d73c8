use domain::{CorrectionItem, Question, Report};
use std::collections::BTreeMap;

pub fn question(enunciado: &str, letters: &[&str], gabarito: &str) -> Question {
    let alternativas: BTreeMap<String, String> = letters
        .iter()
        .map(|letter| (letter.to_string(), format!("alternativa {letter}")))
        .collect();
    Question {
        enunciado: enunciado.to_string(),
        alternativas,
        gabarito: gabarito.to_string(),
        habilidades_combinadas: Some(vec!["EF09MA09".to_string()]),
    }
}

/// `count` questions with alternatives `a`..`d`.
pub fn questions(count: usize) -> Vec<Question> {
    (1..=count)
        .map(|n| question(&format!("Questão {n}"), &["a", "b", "c", "d"], "a"))
        .collect()
}

pub fn report() -> Report {
    Report {
        total_questoes: 3,
        total_acertos: 2,
        percentual_acerto: 200.0 / 3.0,
        resumo: "Bom domínio de equações do 2º grau.".to_string(),
        correcao_detalhada: vec![
            correction("1", "a", "a", true),
            correction("2", "b", "b", true),
            correction("3", "c", "d", false),
        ],
        habilidades_a_revisar: vec!["EF09MA09".to_string()],
        recomendacoes: "Revise a fórmula de Bhaskara.".to_string(),
    }
}

fn correction(questao: &str, sua: &str, gabarito: &str, acertou: bool) -> CorrectionItem {
    CorrectionItem {
        questao: questao.to_string(),
        sua_resposta: sua.to_string(),
        gabarito_correto: gabarito.to_string(),
        acertou,
        feedback: if acertou { "Correto." } else { "Reveja o discriminante." }.to_string(),
    }
}
