//! Starter content written on first startup.

use serde_json::json;

use crate::domain::foundation::Timestamp;
use crate::domain::records::{
    AchievementDraft, DietDraft, ScheduleEntryDraft, TechniqueDraft, WorkoutDraft,
};

fn image_ref(prompt: &str, angle: &str, bodies: &str) -> String {
    json!({
        "descricao_prompt_imagem": prompt,
        "angulo": angle,
        "posicoes_corpo": bodies,
        "ambiente": "tatame neutro",
    })
    .to_string()
}

#[allow(clippy::too_many_arguments)]
fn technique(
    name: &str,
    category: &str,
    kind: &str,
    objective: &str,
    situation: &str,
    steps: &str,
    adjustments: &str,
    errors: &str,
    safety: &str,
    strategy: &str,
    image: String,
) -> TechniqueDraft {
    TechniqueDraft {
        name: name.to_string(),
        category: category.to_string(),
        technique_type: Some(kind.to_string()),
        objective: Some(objective.to_string()),
        situation: Some(situation.to_string()),
        steps: Some(steps.to_string()),
        adjustments: Some(adjustments.to_string()),
        errors: Some(errors.to_string()),
        safety: Some(safety.to_string()),
        strategy: Some(strategy.to_string()),
        image_ref: Some(image),
        status: None,
        favorited: None,
        notes: None,
    }
}

pub fn techniques() -> Vec<TechniqueDraft> {
    vec![
        technique(
            "Single Leg",
            "QUEDAS",
            "Ataque",
            "Derrubar o oponente controlando uma perna",
            "Oponente em pé com base paralela ou avançada",
            "1. Faça a pegada na gola e manga; 2. Entre com o joelho no chão entre as pernas do oponente; 3. Abrace a perna do oponente; 4. Levante-se mantendo a perna presa; 5. Derrube o oponente.",
            "Mantenha a cabeça colada no peito do oponente",
            "Deixar a cabeça baixa facilitando a guilhotina",
            "Cuidado com o sprawl",
            "Explosão e timing",
            image_ref(
                "Atleta de kimono abraçando a perna do oponente em pé",
                "lateral",
                "um em pé, outro agachado",
            ),
        ),
        technique(
            "Double Leg",
            "QUEDAS",
            "Ataque",
            "Derrubar o oponente controlando as duas pernas",
            "Oponente em pé com base alta",
            "1. Nivele o quadril; 2. Entre com os dois joelhos próximos aos pés do oponente; 3. Abrace as duas pernas atrás dos joelhos; 4. Empurre com o ombro e puxe as pernas; 5. Derrube lateralmente.",
            "Mantenha as costas retas na entrada",
            "Entrar de longe sem quebrar a postura",
            "Cuidado com a guilhotina",
            "Velocidade e pressão",
            image_ref(
                "Atleta entrando nas duas pernas do oponente",
                "diagonal",
                "entrada de queda",
            ),
        ),
        technique(
            "Torreando",
            "PASSAGENS DE GUARDA",
            "Ataque",
            "Passar a guarda controlando as calças",
            "Oponente de guarda aberta",
            "1. Faça pegada nas calças na altura dos joelhos; 2. Empurre as pernas para o lado; 3. Circule para o lado oposto; 4. Estabilize no controle lateral.",
            "Mantenha os braços esticados para evitar a reposição",
            "Ficar muito próximo das pernas sem controle",
            "Cuidado com triângulos",
            "Movimentação lateral rápida",
            image_ref(
                "Atleta em pé empurrando as pernas do oponente no chão",
                "superior",
                "um em pé, outro deitado",
            ),
        ),
        technique(
            "Armbar da Guarda",
            "FINALIZAÇÕES (ATAQUES)",
            "Ataque",
            "Finalizar o oponente com chave de braço",
            "Oponente dentro da sua guarda fechada",
            "1. Controle o braço e a gola; 2. Coloque o pé no quadril; 3. Gire o corpo e passe a perna sobre a cabeça; 4. Aperte os joelhos e eleve o quadril.",
            "Mantenha o braço do oponente colado ao seu peito",
            "Deixar espaço entre o seu quadril e o ombro dele",
            "Cuidado com o amassamento",
            "Isolamento do braço",
            image_ref(
                "Atleta aplicando chave de braço da guarda fechada",
                "lateral",
                "um por cima, outro por baixo",
            ),
        ),
        technique(
            "Mata-leão",
            "FINALIZAÇÕES (ATAQUES)",
            "Ataque",
            "Finalizar o oponente com estrangulamento pelas costas",
            "Você nas costas do oponente com ganchos",
            "1. Passe o braço pelo pescoço; 2. Segure no seu próprio bíceps; 3. Coloque a outra mão atrás da cabeça; 4. Aperte e expire.",
            "Esconda a mão atrás da cabeça para evitar a defesa",
            "Não fechar os cotovelos",
            "Cuidado com a defesa de mão",
            "Controle total das costas",
            image_ref(
                "Atleta aplicando mata-leão pelas costas",
                "diagonal",
                "um nas costas do outro",
            ),
        ),
        technique(
            "Escape da Montada",
            "DEFESAS",
            "Defesa",
            "Sair da posição de montada",
            "Oponente montado sobre você",
            "1. Proteja o pescoço; 2. Prenda um braço e a perna do mesmo lado; 3. Faça a ponte (upa); 4. Gire para o lado do braço preso; 5. Caia na guarda.",
            "Explosão no quadril é fundamental",
            "Tentar empurrar o oponente com as mãos",
            "Cuidado com armbars durante a saída",
            "Timing do upa",
            image_ref(
                "Atleta fazendo ponte para sair da montada",
                "lateral",
                "um montado, outro por baixo",
            ),
        ),
    ]
}

/// The first achievement starts unlocked at `unlocked_at`.
pub fn achievements(unlocked_at: Timestamp) -> Vec<AchievementDraft> {
    let entry = |name: &str, category: &str, icon: &str, date: Option<String>| AchievementDraft {
        name: name.to_string(),
        category: Some(category.to_string()),
        icon: Some(icon.to_string()),
        unlocked: Some(date.is_some()),
        date,
    };

    vec![
        entry(
            "Primeiro Passo",
            "Consistência",
            "check-circle",
            Some(unlocked_at.to_storage_string()),
        ),
        entry("Técnico", "Técnica", "book-open", None),
        entry("Monstro", "Física", "dumbbell", None),
        entry("Competidor", "Competição", "trophy", None),
        entry("Mestre da Dieta", "Consistência", "utensils", None),
    ]
}

const WORKOUTS: &[(&str, &str, i64, &str, i64, &str)] = &[
    // A: upper body strength and scapular stability
    ("A", "Supino com Halteres (Estabilidade)", 4, "10", 60, "Peito"),
    ("A", "Remada Curvada com Pegada Pronada", 4, "10", 60, "Costas"),
    ("A", "Barra Fixa com Kimono (Grip)", 3, "Falha", 90, "Costas/Pegada"),
    ("A", "Desenvolvimento Militar (Strict Press)", 3, "12", 60, "Ombros"),
    ("A", "Paralelas (Dips) com Peso", 3, "10", 60, "Tríceps/Peito"),
    ("A", "Face Pulls (Saúde do Ombro)", 3, "15", 45, "Deltoide Posterior"),
    ("A", "Flexão de Braço Explosiva", 3, "15", 45, "Peito/Potência"),
    // B: lower body
    ("B", "Agachamento Costas (Back Squat)", 4, "10", 90, "Pernas"),
    ("B", "Levantamento Terra Convencional", 3, "6", 120, "Cadeia Posterior"),
    ("B", "Agachamento Búlgaro (Unilateral)", 3, "10 (cada)", 60, "Pernas/Estabilidade"),
    ("B", "Stiff (RDL)", 3, "12", 60, "Posterior/Lombar"),
    ("B", "Elevação Pélvica Pesada", 4, "12", 60, "Glúteos/Quadril"),
    ("B", "Copenhagen Plank (Adutores)", 3, "30s (cada)", 45, "Adutores/Core"),
    ("B", "Panturrilha Sentado", 4, "15", 45, "Pernas"),
    // C: core and explosiveness
    ("C", "Kettlebell Swing (Heavy)", 4, "20", 45, "Potência de Quadril"),
    ("C", "Medicine Ball Slam (Vertical)", 3, "15", 45, "Potência Superior"),
    ("C", "Burpees Over Bar", 4, "12", 60, "Cardio/Explosão"),
    ("C", "Prancha com Toque no Ombro", 3, "20 (total)", 30, "Core Antirrotacional"),
    ("C", "Russian Twist com Anilha", 3, "20 (cada)", 30, "Core Rotacional"),
    ("C", "Abdominal Canivete (V-Ups)", 3, "15", 30, "Core Total"),
    ("C", "L-Sit (Progressão)", 3, "20s", 45, "Core/Compressão"),
    // D: conditioning drills
    ("D", "Sprawl + Entrada de Queda", 4, "10", 60, "Agilidade"),
    ("D", "Sombra de Jiu-Jitsu (Movimentação)", 3, "3 min", 60, "Técnica/Cardio"),
    ("D", "Pular Corda (Double Unders)", 3, "2 min", 45, "Cardio/Coordenação"),
    ("D", "Passagem de Guarda no Saco/Bola", 3, "2 min", 60, "Agilidade/Drill"),
    ("D", "Escalada de Montanha (Mountain Climbers)", 3, "45s", 30, "Cardio/Core"),
    // E: grip and forearms
    ("E", "Farmer Walk (Caminhada do Fazendeiro)", 3, "40m", 60, "Pegada/Core"),
    ("E", "Rosca Direta com Toalha", 3, "12", 45, "Antebraço/Bíceps"),
    ("E", "Suspensão na Barra Fixa (Dead Hang)", 3, "Máximo", 60, "Resistência de Pegada"),
    ("E", "Extensão de Punho com Halter", 3, "15", 30, "Antebraço"),
    ("E", "Aperto de Handgrip", 3, "20 (cada)", 30, "Força de Esmagamento"),
    // F: mobility and recovery
    ("F", "Mobilidade de Quadril 90/90", 3, "10 (cada)", 0, "Mobilidade"),
    ("F", "Postura do Pombo (Pigeon Pose)", 2, "60s (cada)", 0, "Glúteos/Quadril"),
    ("F", "Cobra para Cão Olhando Baixo", 3, "10 reps", 0, "Coluna/Posterior"),
    ("F", "Mobilidade de Tornozelo", 2, "15 (cada)", 0, "Base"),
    ("F", "Alongamento de Peitoral na Parede", 2, "45s (cada)", 0, "Postura"),
    // Mat warmup
    ("Warmup", "Rolamentos (Frente, Trás, Ombro)", 2, "12", 0, "Mobilidade"),
    ("Warmup", "Fuga de Quadril (4 direções)", 2, "20", 0, "Mobilidade"),
    ("Warmup", "Ponte com Rotação (Upa)", 2, "16", 0, "Mobilidade/Core"),
    ("Warmup", "Shrimping (Fuga de Quadril)", 2, "20m", 0, "Mobilidade"),
    ("Warmup", "Entrada de Queda (Shadow)", 2, "15", 0, "Aquecimento"),
];

pub fn workouts() -> Vec<WorkoutDraft> {
    WORKOUTS
        .iter()
        .map(|(plan, name, sets, reps, rest, group)| WorkoutDraft {
            plan: plan.to_string(),
            name: name.to_string(),
            sets: Some(*sets),
            reps: Some(reps.to_string()),
            rest: Some(*rest),
            muscle_group: Some(group.to_string()),
            completed: None,
        })
        .collect()
}

const SCHEDULE: &[(&str, &str, &str)] = &[
    ("Segunda-Feira", "12:00", "Jiu Jitsu"),
    ("Segunda-Feira", "20:15", "Jiu Jitsu"),
    ("Terça-Feira", "08:30", "Jiu Jitsu"),
    ("Terça-Feira", "12:00", "NOGI"),
    ("Terça-Feira", "15:30", "Jiu Jitsu"),
    ("Quarta-Feira", "12:00", "Jiu Jitsu"),
    ("Quarta-Feira", "20:15", "Jiu Jitsu"),
    ("Quinta-Feira", "08:30", "Jiu Jitsu"),
    ("Quinta-Feira", "12:00", "NOGI"),
    ("Quinta-Feira", "20:15", "Jiu Jitsu"),
    ("Sexta-Feira", "12:00", "Jiu Jitsu"),
    ("Sexta-Feira", "19:40", "NOGI"),
    ("Sábado", "10:00", "OPEN MAT"),
];

pub fn schedule() -> Vec<ScheduleEntryDraft> {
    SCHEDULE
        .iter()
        .map(|(day, time, activity)| ScheduleEntryDraft {
            day: day.to_string(),
            time: time.to_string(),
            activity: activity.to_string(),
        })
        .collect()
}

const DIETS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Ganho de Massa",
        "3200 kcal",
        "P: 180g | C: 400g | G: 80g",
        "text-emerald-500",
        "Café: 4 ovos + Aveia...",
    ),
    (
        "Cutting",
        "2200 kcal",
        "P: 200g | C: 150g | G: 60g",
        "text-orange-500",
        "Café: Omelete de claras...",
    ),
    (
        "Manutenção",
        "2700 kcal",
        "P: 160g | C: 300g | G: 70g",
        "text-blue-500",
        "Café: Pão integral + Queijo...",
    ),
];

pub fn diets() -> Vec<DietDraft> {
    DIETS
        .iter()
        .map(|(title, kcal, macros, color, content)| DietDraft {
            title: title.to_string(),
            kcal: Some(kcal.to_string()),
            macros: Some(macros.to_string()),
            color: Some(color.to_string()),
            content: Some(content.to_string()),
        })
        .collect()
}
