//! Cognitive panel: memory, executive function, neuroplasticity and mood
//! markers, with COMT and caffeine-response profiles.

use serde::Serialize;

use crate::types::{Genome, Section, SnpDef};

use super::combos::apoe_risk_call;
use super::{analyze_sections, PanelReport, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "memory",
        name: "Память",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs17070145",
                gene: "KIBRA (WWC1)",
                description: "Эпизодическая память, консолидация воспоминаний",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("TT", "excellent", "Лучшая эпизодическая память - гомозигота по благоприятному аллелю"),
                    ("CT", "good", "Хорошая эпизодическая память - гетерозигота"),
                    ("CC", "normal", "Обычная эпизодическая память"),
                ],
            },
            SnpDef {
                rsid: "rs4680",
                gene: "COMT Val158Met",
                description: "Рабочая память, когнитивная гибкость, устойчивость к стрессу",
                risk_allele: Some("-"),
                mutation: None,
                interpretations: &[
                    ("AA", "info", "Met/Met ('Worrier') - лучше рабочая память в покое, выше тревожность под стрессом"),
                    ("AG", "info", "Val/Met - сбалансированный тип, адаптивная когнитивная гибкость"),
                    ("GA", "info", "Val/Met - сбалансированный тип, адаптивная когнитивная гибкость"),
                    ("GG", "info", "Val/Val ('Warrior') - лучше когниция под стрессом, хуже в покое"),
                ],
            },
            SnpDef {
                rsid: "rs6265",
                gene: "BDNF Val66Met",
                description: "Нейропластичность, обучение, память",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Val/Val - нормальная секреция BDNF, хорошая нейропластичность"),
                    ("CC", "normal", "Val/Val - нормальная секреция BDNF, хорошая нейропластичность"),
                    ("AG", "moderate", "Val/Met - немного сниженная секреция BDNF"),
                    ("CT", "moderate", "Val/Met - немного сниженная секреция BDNF"),
                    ("AA", "reduced", "Met/Met - сниженная нейропластичность, но может быть компенсировано упражнениями"),
                    ("TT", "reduced", "Met/Met - сниженная нейропластичность, но может быть компенсировано упражнениями"),
                ],
            },
        ],
    },
    Section {
        key: "cognitive_aging",
        name: "Когнитивное старение",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs429358",
                gene: "APOE (e4 маркер)",
                description: "Болезнь Альцгеймера, когнитивное старение",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Вероятно e4/e4 - значительно повышен риск когнитивного снижения"),
                    ("CT", "moderate", "Вероятно носитель e4 - умеренно повышен риск"),
                    ("TC", "moderate", "Вероятно носитель e4 - умеренно повышен риск"),
                    ("TT", "normal", "Нет аллеля e4 - обычный риск когнитивного старения"),
                ],
            },
            SnpDef {
                rsid: "rs7412",
                gene: "APOE (e2 маркер)",
                description: "Защитный аллель против Альцгеймера",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "info", "Используется вместе с rs429358 для определения APOE генотипа"),
                    ("CT", "protective", "Возможно носитель e2 - защитный эффект"),
                    ("TC", "protective", "Возможно носитель e2 - защитный эффект"),
                    ("TT", "info", "Используется вместе с rs429358 для определения APOE генотипа"),
                ],
            },
            SnpDef {
                rsid: "rs9536314",
                gene: "KLOTHO",
                description: "Ген долголетия, защита мозга от старения",
                risk_allele: Some("-"),
                mutation: None,
                interpretations: &[
                    ("GT", "excellent", "Гетерозигота KL-VS - оптимальный вариант, лучшее когнитивное старение"),
                    ("TG", "excellent", "Гетерозигота KL-VS - оптимальный вариант, лучшее когнитивное старение"),
                    ("GG", "normal", "Дикий тип - обычное когнитивное старение"),
                    ("TT", "reduced", "Гомозигота KL-VS - возможно сниженная функция (редко)"),
                ],
            },
            SnpDef {
                rsid: "rs2802292",
                gene: "FOXO3",
                description: "Ген долголетия, защита нейронов, клеточный стресс",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("GG", "excellent", "Ассоциирован с долголетием и лучшим когнитивным здоровьем"),
                    ("GT", "good", "Гетерозигота - умеренно защитный эффект"),
                    ("TG", "good", "Гетерозигота - умеренно защитный эффект"),
                    ("TT", "normal", "Обычный вариант"),
                ],
            },
        ],
    },
    Section {
        key: "attention",
        name: "Внимание и дофамин",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800955",
                gene: "DRD4 -521 C/T",
                description: "Дофаминовый рецептор D4, внимание, СДВГ",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "info", "Сниженная экспрессия DRD4 - может влиять на внимание"),
                    ("CT", "info", "Гетерозигота - средний уровень экспрессии DRD4"),
                    ("TC", "info", "Гетерозигота - средний уровень экспрессии DRD4"),
                    ("CC", "normal", "Нормальная экспрессия рецептора D4"),
                ],
            },
            SnpDef {
                rsid: "rs1800497",
                gene: "DRD2/ANKK1 Taq1A",
                description: "D2 дофаминовые рецепторы, внимание, обучение с подкреплением",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "moderate", "A1/A1 - меньше D2 рецепторов, может влиять на обучение и мотивацию"),
                    ("AG", "low", "A1/A2 - умеренно снижены D2 рецепторы"),
                    ("GA", "low", "A1/A2 - умеренно снижены D2 рецепторы"),
                    ("GG", "normal", "A2/A2 - нормальное количество D2 рецепторов"),
                ],
            },
            SnpDef {
                rsid: "rs27072",
                gene: "DAT1 (SLC6A3)",
                description: "Транспортер дофамина, скорость обработки информации",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "info", "Может влиять на дофаминергическую передачу"),
                    ("AG", "info", "Гетерозигота"),
                    ("GA", "info", "Гетерозигота"),
                    ("GG", "normal", "Обычный транспорт дофамина"),
                ],
            },
        ],
    },
    Section {
        key: "verbal",
        name: "Вербальные способности",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs7794745",
                gene: "CNTNAP2",
                description: "Развитие речи, языковые способности",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Ассоциирован со сниженными языковыми способностями"),
                    ("AT", "low", "Гетерозигота - небольшое влияние"),
                    ("TA", "low", "Гетерозигота - небольшое влияние"),
                    ("AA", "normal", "Нормальные языковые способности"),
                ],
            },
            SnpDef {
                rsid: "rs17236239",
                gene: "CNTNAP2",
                description: "Контактин-ассоциированный белок, нейроразвитие",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "moderate", "Может влиять на языковое развитие"),
                    ("AG", "low", "Гетерозигота"),
                    ("GA", "low", "Гетерозигота"),
                    ("GG", "normal", "Нормальный вариант"),
                ],
            },
            SnpDef {
                rsid: "rs759178",
                gene: "FOXP2",
                description: "Ген речи и языка, артикуляция, грамматика",
                risk_allele: Some("-"),
                mutation: None,
                interpretations: &[
                    ("AA", "info", "Вариант гена речи FOXP2"),
                    ("AG", "info", "Гетерозигота FOXP2"),
                    ("GA", "info", "Гетерозигота FOXP2"),
                    ("GG", "info", "Вариант гена речи FOXP2"),
                ],
            },
        ],
    },
    Section {
        key: "neuroprotection",
        name: "Нейропротекция",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800629",
                gene: "TNF-a -308",
                description: "Нейровоспаление, воспалительный ответ в мозге",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Высокая продукция TNF-a - повышенное нейровоспаление"),
                    ("AG", "moderate", "Умеренно повышенная продукция TNF-a"),
                    ("GA", "moderate", "Умеренно повышенная продукция TNF-a"),
                    ("GG", "normal", "Нормальный уровень TNF-a"),
                ],
            },
            SnpDef {
                rsid: "rs1800795",
                gene: "IL-6 -174",
                description: "Интерлейкин-6, нейровоспаление, когнитивное старение",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "Повышенная продукция IL-6 - больше воспаления"),
                    ("CG", "low", "Умеренно повышенный уровень IL-6"),
                    ("GC", "low", "Умеренно повышенный уровень IL-6"),
                    ("GG", "normal", "Нормальный уровень IL-6 - меньше нейровоспаления"),
                ],
            },
            SnpDef {
                rsid: "rs1800896",
                gene: "IL-10 -1082",
                description: "Противовоспалительный цитокин, защита мозга",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "protective", "Высокая продукция IL-10 - хорошая противовоспалительная защита"),
                    ("AG", "normal", "Средняя продукция IL-10"),
                    ("GA", "normal", "Средняя продукция IL-10"),
                    ("CT", "normal", "Средняя продукция IL-10"),
                    ("TC", "normal", "Средняя продукция IL-10"),
                    ("AA", "reduced", "Низкая продукция IL-10 - сниженная противовоспалительная защита"),
                    ("TT", "reduced", "Низкая продукция IL-10 - сниженная противовоспалительная защита"),
                    ("CC", "protective", "Высокая продукция IL-10 - хорошая противовоспалительная защита"),
                ],
            },
        ],
    },
    Section {
        key: "caffeine_cognition",
        name: "Кофеин и когниция",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs762551",
                gene: "CYP1A2",
                description: "Метаболизм кофеина, когнитивные эффекты кофе",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("AA", "excellent", "Быстрый метаболизатор - кофеин улучшает когницию, низкий риск побочек"),
                    ("AC", "good", "Средний метаболизатор - умеренная польза от кофеина"),
                    ("CA", "good", "Средний метаболизатор - умеренная польза от кофеина"),
                    ("CC", "reduced", "Медленный метаболизатор - кофеин может вызывать тревожность, бессонницу"),
                ],
            },
            SnpDef {
                rsid: "rs5751876",
                gene: "ADORA2A",
                description: "Аденозиновый рецептор, тревожность от кофеина",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("TT", "excellent", "Меньше тревожности от кофе, лучше когнитивный эффект"),
                    ("CT", "good", "Умеренная чувствительность к тревожности от кофеина"),
                    ("TC", "good", "Умеренная чувствительность к тревожности от кофеина"),
                    ("CC", "sensitive", "Высокая тревожность от кофеина - рекомендуется ограничить"),
                ],
            },
        ],
    },
];

/// COMT Val158Met working profile from rs4680
#[derive(Debug, Clone, Serialize)]
pub struct ComtProfile {
    pub genotype: String,
    pub profile_name: &'static str,
    pub profile_type: &'static str,
    pub description: &'static str,
}

pub fn comt_profile(genome: &Genome) -> ComtProfile {
    let genotype = genome
        .get("rs4680")
        .map(|r| r.genotype.clone())
        .unwrap_or_default();

    let (profile_name, profile_type, description) = match genotype.as_str() {
        "AA" => (
            "Worrier (Met/Met)",
            "cognitive",
            "Лучше рабочая память и исполнительные функции в спокойном состоянии. \
             Может испытывать снижение когниции под стрессом. Рекомендуется: \
             медитация, управление стрессом, избегать избытка кофеина.",
        ),
        "AG" | "GA" => (
            "Intermediate (Val/Met)",
            "balanced",
            "Сбалансированный профиль. Адаптивная когнитивная гибкость - \
             хорошо работает и в покое, и под умеренным стрессом.",
        ),
        "GG" => (
            "Warrior (Val/Val)",
            "stress_resilient",
            "Лучше когнитивные функции под стрессом и давлением. \
             Может хуже работать в рутинных спокойных условиях. \
             Рекомендуется: умеренный стресс для оптимальной работы, дедлайны.",
        ),
        _ => ("Не определён", "unknown", "Генотип не распознан"),
    };

    ComtProfile {
        genotype,
        profile_name,
        profile_type,
        description,
    }
}

/// Cognitive caffeine response from CYP1A2 (metabolism) and ADORA2A (anxiety)
#[derive(Debug, Clone, Serialize)]
pub struct CaffeineResponse {
    pub cyp1a2_genotype: String,
    pub adora2a_genotype: String,
    pub metabolism: &'static str,
    pub anxiety_sensitivity: &'static str,
    pub response_type: &'static str,
    pub recommendation: &'static str,
}

pub fn caffeine_response(genome: &Genome) -> CaffeineResponse {
    let rs762551 = genome
        .get("rs762551")
        .map(|r| r.genotype.clone())
        .unwrap_or_default();
    let rs5751876 = genome
        .get("rs5751876")
        .map(|r| r.genotype.clone())
        .unwrap_or_default();

    let metabolism = match rs762551.as_str() {
        "AA" => "fast",
        "AC" | "CA" => "intermediate",
        "CC" => "slow",
        _ => "unknown",
    };

    let anxiety = match rs5751876.as_str() {
        "TT" => "low",
        "CT" | "TC" => "moderate",
        "CC" => "high",
        _ => "unknown",
    };

    let (response_type, recommendation) = match (metabolism, anxiety) {
        ("fast", "low") => (
            "excellent",
            "Отличный респондер на кофеин. 2-4 чашки кофе улучшат когницию без побочек.",
        ),
        ("fast", "moderate") => ("good", "Хороший респондер. 2-3 чашки кофе, избегать после обеда."),
        ("fast", "high") => (
            "moderate",
            "Быстрый метаболизм, но высокая тревожность. Ограничить до 1-2 чашек утром.",
        ),
        ("intermediate", "low") => ("good", "Умеренный респондер. 1-2 чашки кофе, не позже 14:00."),
        ("intermediate", "moderate") => ("moderate", "Средняя чувствительность. 1-2 чашки утром."),
        ("intermediate", "high") => (
            "limited",
            "Средний метаболизм + высокая тревожность. Рассмотреть зелёный чай.",
        ),
        ("slow", "low") => ("moderate", "Медленный метаболизм. 1 чашка утром, избегать после полудня."),
        ("slow", "moderate") => ("limited", "Медленный метаболизм + тревожность. Максимум 1 чашка утром."),
        ("slow", "high") => (
            "avoid",
            "Медленный метаболизм + высокая тревожность. Рекомендуется избегать кофеин.",
        ),
        _ => ("unknown", "Недостаточно данных для рекомендации"),
    };

    CaffeineResponse {
        cyp1a2_genotype: rs762551,
        adora2a_genotype: rs5751876,
        metabolism,
        anxiety_sensitivity: anxiety,
        response_type,
        recommendation,
    }
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);

    let mut specials = Vec::new();

    let apoe = apoe_risk_call(genome);
    specials.push(SpecialSection {
        heading: "APOE генотип (когнитивное старение)".to_string(),
        markdown: format!(
            "- rs429358: {}\n- rs7412: {}\n- **APOE генотип: {}**\n- Риск: {}\n- {}",
            apoe.rs429358, apoe.rs7412, apoe.genotype, apoe.tag, apoe.text
        ),
    });

    let comt = comt_profile(genome);
    specials.push(SpecialSection {
        heading: "COMT профиль".to_string(),
        markdown: format!(
            "- Генотип rs4680: {}\n- **Профиль: {}**\n- {}",
            comt.genotype, comt.profile_name, comt.description
        ),
    });

    let caffeine = caffeine_response(genome);
    specials.push(SpecialSection {
        heading: "Реакция на кофеин".to_string(),
        markdown: format!(
            "- CYP1A2 (rs762551): {}\n- ADORA2A (rs5751876): {}\n- Метаболизм: {}\n- Тревожная чувствительность: {}\n- **Тип ответа: {}**\n- {}",
            caffeine.cyp1a2_genotype,
            caffeine.adora2a_genotype,
            caffeine.metabolism,
            caffeine.anxiety_sensitivity,
            caffeine.response_type,
            caffeine.recommendation
        ),
    });

    PanelReport {
        key: "cognitive",
        title: "Когнитивные особенности",
        sections,
        specials,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenomeRecord;

    fn genome_with(pairs: &[(&str, &str)]) -> Genome {
        let mut genome = Genome::new();
        for (rsid, genotype) in pairs {
            genome.insert(
                rsid.to_string(),
                GenomeRecord {
                    chromosome: "22".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn met_met_is_the_worrier_profile() {
        let profile = comt_profile(&genome_with(&[("rs4680", "AA")]));
        assert_eq!(profile.profile_type, "cognitive");
        assert!(profile.profile_name.starts_with("Worrier"));
    }

    #[test]
    fn transposed_val_met_still_resolves() {
        let profile = comt_profile(&genome_with(&[("rs4680", "GA")]));
        assert_eq!(profile.profile_type, "balanced");
    }

    #[test]
    fn missing_rs4680_is_unknown() {
        let profile = comt_profile(&Genome::new());
        assert_eq!(profile.profile_type, "unknown");
    }

    #[test]
    fn slow_metabolizer_with_anxiety_should_avoid_caffeine() {
        let response =
            caffeine_response(&genome_with(&[("rs762551", "CC"), ("rs5751876", "CC")]));
        assert_eq!(response.metabolism, "slow");
        assert_eq!(response.anxiety_sensitivity, "high");
        assert_eq!(response.response_type, "avoid");
    }

    #[test]
    fn fast_low_anxiety_is_the_best_responder() {
        let response =
            caffeine_response(&genome_with(&[("rs762551", "AA"), ("rs5751876", "TT")]));
        assert_eq!(response.response_type, "excellent");
    }

    #[test]
    fn partial_data_yields_unknown_recommendation() {
        let response = caffeine_response(&genome_with(&[("rs762551", "AA")]));
        assert_eq!(response.response_type, "unknown");
    }
}
