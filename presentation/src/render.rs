use application::classroom_service::{BankView, ExamBoard};
use application::PracticeError;
use colored::Colorize;
use domain::dashboard::{PerformanceBadge, TeacherDashboard};
use domain::mock_exam::CompletionBand;
use domain::question_bank::{ReliabilityBand, ReviewStatus};
use domain::student::{RaioXHistory, StudentExam, StudentExamStatus};
use domain::{BackendHealth, Question, Report, SessionId, SessionSnapshot};
use shared::utils::preview;

pub fn question(number: usize, question: &Question) {
    println!("\n{}", format!("Questão {number}").bold());
    println!("{}", question.enunciado);
    if !question.skills().is_empty() {
        println!("{}", format!("BNCC: {}", question.skills().join(", ")).dimmed());
    }
    for (letter, text) in &question.alternativas {
        println!("  {} {}", format!("{letter})").cyan(), text);
    }
}

pub fn started(session_id: &SessionId, questions: &[Question]) {
    println!(
        "{} {}",
        "Sessão:".green().bold(),
        session_id.as_str().yellow()
    );
    println!("{} questões geradas", questions.len());
    for (idx, q) in questions.iter().enumerate() {
        question(idx + 1, q);
    }
}

pub fn report(report: &Report) {
    println!("\n{}", "Seu Raio-X".green().bold());
    println!(
        "  Total: {}   Acertos: {}   Aproveitamento: {}",
        report.total_questoes.to_string().bold(),
        report.total_acertos.to_string().green().bold(),
        format!("{:.1}%", report.percentual_acerto).bold()
    );

    println!("\n{}", "Resumo".bold());
    println!("  {}", report.resumo);

    if !report.correcao_detalhada.is_empty() {
        println!("\n{}", "Correção detalhada".bold());
        for item in &report.correcao_detalhada {
            let mark = if item.acertou {
                "✓".green()
            } else {
                "✗".red()
            };
            println!("  {} {}", mark, preview(&item.questao, 80));
            println!(
                "      Sua resposta: {}   Gabarito: {}",
                item.sua_resposta, item.gabarito_correto
            );
            if !item.feedback.is_empty() {
                println!("      {}", item.feedback.dimmed());
            }
        }
    }

    if !report.habilidades_a_revisar.is_empty() {
        println!("\n{}", "Habilidades BNCC a revisar".bold());
        for skill in &report.habilidades_a_revisar {
            println!("  - {skill}");
        }
    }

    if !report.recomendacoes.is_empty() {
        println!("\n{}", "Recomendações pedagógicas".bold());
        println!("  {}", report.recomendacoes);
    }
}

pub fn snapshot(snapshot: &SessionSnapshot) {
    println!("{} {}", "Sessão:".green().bold(), snapshot.session_id.yellow());
    if let Some(created) = &snapshot.created_at {
        println!("Criada em:   {created}");
    }
    match &snapshot.submitted_at {
        Some(submitted) => println!("Enviada em:  {submitted}"),
        None => println!("Enviada em:  {}", "ainda não".dimmed()),
    }
    let status = if snapshot.has_relatorio {
        "Raio-X disponível".green()
    } else {
        "aberta".yellow()
    };
    println!("Situação:    {status}");
    if !snapshot.questao_original.is_empty() {
        println!("\n{}", "Questão de referência".bold());
        println!("{}", snapshot.questao_original);
    }
    for (idx, q) in snapshot.questoes_geradas.iter().enumerate() {
        question(idx + 1, q);
    }
}

pub fn health(url: &str, health: &BackendHealth) {
    let status = if health.status.eq_ignore_ascii_case("healthy") {
        health.status.green()
    } else {
        health.status.yellow()
    };
    println!("{url}: {status} ({} {})", health.app, health.version);
}

/// Validation problems are shown as-is; backend failures get one generic notice.
pub fn practice_error(err: &PracticeError, action: &str) {
    match err {
        PracticeError::Validation(v) => println!("{}", format!("Atenção: {v}").yellow()),
        _ => println!("{}", format!("Falha ao {action}. Tente novamente.").red()),
    }
}

fn badge(badge: PerformanceBadge) -> colored::ColoredString {
    let label = badge.label();
    match badge {
        PerformanceBadge::Excellent => label.green(),
        PerformanceBadge::Good => label.blue(),
        PerformanceBadge::Fair => label.yellow(),
        PerformanceBadge::NeedsImprovement => label.red(),
    }
}

pub fn dashboard(dashboard: &TeacherDashboard) {
    println!("{}", "Dashboard do Professor".bold());
    println!(
        "  Alunos: {}   Sessões: {}   Questões: {}   Média geral: {}",
        dashboard.total_students(),
        dashboard.total_sessions(),
        dashboard.total_questions(),
        format!("{:.1}%", dashboard.overall_average()).bold()
    );

    println!("\n{}", "Alunos".bold());
    for student in &dashboard.students {
        println!(
            "  {:<18} {:>3}/{:<3} {:>6.1}%  {:<16} sessões: {:<3} revisar: {}",
            student.name,
            student.total_correct,
            student.total_questions,
            student.percent_correct(),
            badge(student.badge()),
            student.sessions_completed,
            student.skills_to_review.join(", ")
        );
    }

    println!("\n{}", "Habilidades por desempenho".bold());
    for skill in &dashboard.skills {
        println!(
            "  {} {:>5.1}%  {}",
            skill.trend.symbol(),
            skill.percent,
            skill.skill
        );
    }
}

fn review_status(status: ReviewStatus) -> colored::ColoredString {
    let label = status.label();
    match status {
        ReviewStatus::Pending => label.normal(),
        ReviewStatus::Adequate => label.green(),
        ReviewStatus::NeedsRevision => label.yellow(),
        ReviewStatus::Incoherent => label.red(),
    }
}

pub fn question_bank(view: &BankView) {
    println!("{}", "Banco de Questões".bold());
    println!(
        "  Pendentes: {}   Adequadas: {}   Com problemas: {}   ({} de {} exibidas)",
        view.counts.pending,
        view.counts.adequate,
        view.counts.flagged,
        view.questions.len(),
        view.total
    );
    for q in &view.questions {
        let reliability = match (q.reliability, q.reliability_band()) {
            (Some(score), ReliabilityBand::High) => format!("{score}%").green(),
            (Some(score), ReliabilityBand::Medium) => format!("{score}%").yellow(),
            (Some(score), ReliabilityBand::Low) => format!("{score}%").red(),
            _ => "-".dimmed(),
        };
        println!(
            "\n  #{} [{}] confiabilidade {}",
            q.id,
            review_status(q.status),
            reliability
        );
        println!("  {}", q.statement);
        println!(
            "  {}",
            format!(
                "{} · {} · {} · {} · {}",
                q.discipline, q.topic, q.skill, q.student, q.date
            )
            .dimmed()
        );
    }
}

pub fn mock_exams(board: &ExamBoard) {
    println!("{}", "Gestão de Simulados".bold());
    println!(
        "  Ativos: {}   Agendados: {}   Alunos inscritos: {}",
        board.summary.active, board.summary.scheduled, board.summary.enrolled
    );
    for exam in &board.exams {
        println!("\n  {} [{}]", exam.name.bold(), exam.status.label());
        println!(
            "  {} questões · {} a {} · turmas: {}",
            exam.questions,
            exam.start_date,
            exam.end_date,
            exam.classes.join(", ")
        );
        let progress = match exam.completion_percent() {
            Some(p) => format!("{}/{} ({p:.0}%)", exam.completed, exam.enrolled),
            None => "sem inscritos".to_string(),
        };
        let progress = match exam.completion_band() {
            CompletionBand::Good => progress.green(),
            CompletionBand::Fair => progress.yellow(),
            CompletionBand::Low => progress.red(),
            CompletionBand::Empty => progress.dimmed(),
        };
        println!("  concluíram: {progress}   média: {:.1}%", exam.average);
    }
}

pub fn student_exams(exams: &[StudentExam]) {
    println!("{}", "Simulados Disponíveis".bold());
    for exam in exams {
        let status = match exam.status {
            StudentExamStatus::Available => exam.status.label().green(),
            StudentExamStatus::InProgress => exam.status.label().yellow(),
            StudentExamStatus::Completed => exam.status.label().dimmed(),
        };
        println!("\n  {} [{status}]", exam.title.bold());
        println!("  {}", exam.description);
        println!("  {} questões · {}", exam.questions, exam.duration);
        if let Some(progress) = exam.visible_progress() {
            println!("  Progresso: {progress}%");
        }
        println!("  → {}", exam.status.action().cyan());
    }
}

pub fn raio_x_history(history: &RaioXHistory) {
    println!("{}", "Meu Raio-X".bold());
    println!(
        "  Práticas: {}   Questões: {}   Taxa de acerto: {}",
        history.total_practices,
        history.total_questions,
        format!("{:.1}%", history.hit_rate).cyan()
    );
    if !history.challenging_skills.is_empty() {
        println!("\n{}", "Habilidades mais desafiadoras".bold());
        for skill in &history.challenging_skills {
            println!("  • {skill}");
        }
    }
    println!("\n{}", "Histórico".bold());
    for record in &history.records {
        let percent = format!("{:.1}%", record.percent);
        let percent = if record.on_target() {
            percent.green()
        } else {
            percent.yellow()
        };
        println!(
            "  {}  {:<22} {}/{}  {percent}",
            record.date, record.kind, record.correct, record.questions
        );
    }
}
