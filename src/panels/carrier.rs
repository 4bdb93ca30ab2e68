//! Carrier status panel. On top of the table lookup it falls back to
//! counting risk alleles, since chips report known deletions in several
//! encodings the tables cannot enumerate exhaustively.

use crate::interpret::interpret;
use crate::types::{Finding, Genome, Section, SnpDef};

use super::{PanelReport, SectionResult, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "cystic_fibrosis",
        name: "Муковисцидоз (Cystic Fibrosis)",
        inheritance: Some("Аутосомно-рецессивное"),
        frequency: Some("1/25 носителей среди европейцев"),
        snps: &[
            SnpDef {
                rsid: "rs113993960",
                gene: "CFTR",
                description: "Наиболее частая мутация муковисцидоза (70% случаев)",
                risk_allele: Some("del"),
                mutation: Some("F508del (p.Phe508del)"),
                interpretations: &[
                    ("--", "carrier", "Носитель F508del - делеция обнаружена"),
                    ("CTT", "normal", "Норма - нет делеции"),
                    ("CT", "carrier", "Возможный носитель (гетерозигота)"),
                    ("II", "normal", "Инсерция - норма"),
                    ("DI", "carrier", "Носитель делеции"),
                    ("DD", "affected", "Гомозигота по делеции - возможен муковисцидоз"),
                ],
            },
            SnpDef {
                rsid: "rs121909005",
                gene: "CFTR",
                description: "Стоп-мутация, 2-3% случаев муковисцидоза",
                risk_allele: Some("A"),
                mutation: Some("G542X (p.Gly542Ter)"),
                interpretations: &[
                    ("AA", "affected", "Гомозигота G542X - муковисцидоз"),
                    ("AG", "carrier", "Носитель G542X"),
                    ("GA", "carrier", "Носитель G542X"),
                    ("GG", "normal", "Норма - нет мутации G542X"),
                ],
            },
        ],
    },
    Section {
        key: "sickle_cell",
        name: "Серповидноклеточная анемия (Sickle Cell)",
        inheritance: Some("Аутосомно-рецессивное"),
        frequency: Some("1/12 носителей среди афроамериканцев, редко у европейцев"),
        snps: &[
            SnpDef {
                rsid: "rs334",
                gene: "HBB",
                description: "Мутация серповидноклеточной анемии",
                risk_allele: Some("T"),
                mutation: Some("HbS (p.Glu6Val)"),
                interpretations: &[
                    ("AA", "normal", "Норма - нормальный гемоглобин HbA"),
                    ("AT", "carrier", "Носитель HbS - серповидноклеточный признак (защита от малярии)"),
                    ("TA", "carrier", "Носитель HbS - серповидноклеточный признак (защита от малярии)"),
                    ("TT", "affected", "Серповидноклеточная анемия (HbSS) - требуется медицинское наблюдение"),
                ],
            },
        ],
    },
    Section {
        key: "tay_sachs",
        name: "Болезнь Тея-Сакса (Tay-Sachs)",
        inheritance: Some("Аутосомно-рецессивное"),
        frequency: Some("1/30 носителей среди ашкеназских евреев"),
        snps: &[
            SnpDef {
                rsid: "rs80338939",
                gene: "HEXA",
                description: "Мутация болезни Тея-Сакса",
                risk_allele: Some("T"),
                mutation: Some("IVS12+1G>C / 1278insTATC"),
                interpretations: &[
                    ("CC", "normal", "Норма - нет мутации"),
                    ("CT", "carrier", "Носитель мутации Тея-Сакса"),
                    ("TC", "carrier", "Носитель мутации Тея-Сакса"),
                    ("TT", "affected", "Гомозигота - болезнь Тея-Сакса"),
                    ("GG", "normal", "Норма"),
                    ("AG", "carrier", "Возможный носитель"),
                    ("GA", "carrier", "Возможный носитель"),
                    ("AA", "affected", "Возможна болезнь Тея-Сакса"),
                ],
            },
        ],
    },
    Section {
        key: "gaucher",
        name: "Болезнь Гоше (Gaucher Disease)",
        inheritance: Some("Аутосомно-рецессивное"),
        frequency: Some("1/15 носителей среди ашкеназских евреев"),
        snps: &[
            SnpDef {
                rsid: "rs76763715",
                gene: "GBA",
                description: "Наиболее частая мутация болезни Гоше тип 1",
                risk_allele: Some("A"),
                mutation: Some("N370S (p.Asn409Ser)"),
                interpretations: &[
                    ("GG", "normal", "Норма - нет мутации N370S"),
                    ("AG", "carrier", "Носитель N370S - болезнь Гоше тип 1"),
                    ("GA", "carrier", "Носитель N370S - болезнь Гоше тип 1"),
                    ("AA", "affected", "Гомозигота N370S - болезнь Гоше тип 1"),
                    ("CC", "normal", "Норма"),
                    ("CT", "carrier", "Возможный носитель"),
                    ("TC", "carrier", "Возможный носитель"),
                    ("TT", "affected", "Возможна болезнь Гоше"),
                ],
            },
        ],
    },
    Section {
        key: "hearing_loss",
        name: "Наследственная глухота (GJB2)",
        inheritance: Some("Аутосомно-рецессивное"),
        frequency: Some("1/30-50 носителей в общей популяции"),
        snps: &[
            SnpDef {
                rsid: "rs80338939",
                gene: "GJB2",
                description: "Наиболее частая причина наследственной глухоты у европейцев",
                risk_allele: Some("del"),
                mutation: Some("35delG (c.35delG)"),
                interpretations: &[
                    ("--", "carrier", "Носитель 35delG"),
                    ("GG", "normal", "Норма - нет делеции 35delG"),
                    ("G-", "carrier", "Носитель делеции 35delG"),
                    ("-G", "carrier", "Носитель делеции 35delG"),
                    ("CC", "normal", "Норма"),
                    ("CT", "carrier", "Возможный носитель"),
                    ("TT", "affected", "Возможна глухота"),
                ],
            },
        ],
    },
    Section {
        key: "hemochromatosis",
        name: "Гемохроматоз (Hemochromatosis)",
        inheritance: Some("Аутосомно-рецессивное с неполной пенетрантностью"),
        frequency: Some("1/8-10 носителей среди европейцев"),
        snps: &[
            SnpDef {
                rsid: "rs1800562",
                gene: "HFE",
                description: "Главная мутация наследственного гемохроматоза",
                risk_allele: Some("A"),
                mutation: Some("C282Y (p.Cys282Tyr)"),
                interpretations: &[
                    ("GG", "normal", "Норма - нет мутации C282Y"),
                    ("AG", "carrier", "Носитель C282Y - контроль ферритина рекомендован"),
                    ("GA", "carrier", "Носитель C282Y - контроль ферритина рекомендован"),
                    ("AA", "affected", "Гомозигота C282Y - высокий риск гемохроматоза, контроль железа обязателен"),
                ],
            },
            SnpDef {
                rsid: "rs1799945",
                gene: "HFE",
                description: "Вторая по частоте мутация HFE (мягкий эффект)",
                risk_allele: Some("G"),
                mutation: Some("H63D (p.His63Asp)"),
                interpretations: &[
                    ("CC", "normal", "Норма - нет мутации H63D"),
                    ("CG", "carrier", "Носитель H63D - обычно клинически незначим"),
                    ("GC", "carrier", "Носитель H63D - обычно клинически незначим"),
                    ("GG", "mild_risk", "Гомозигота H63D - небольшой риск накопления железа"),
                ],
            },
        ],
    },
    Section {
        key: "alpha1_antitrypsin",
        name: "Дефицит альфа-1-антитрипсина (Alpha-1 Antitrypsin)",
        inheritance: Some("Аутосомно-кодоминантное"),
        frequency: Some("1/25 носителей Z-аллеля среди европейцев"),
        snps: &[
            SnpDef {
                rsid: "rs28929474",
                gene: "SERPINA1",
                description: "Тяжелый дефицит - риск эмфиземы и цирроза",
                risk_allele: Some("T"),
                mutation: Some("Z (p.Glu342Lys)"),
                interpretations: &[
                    ("CC", "normal", "MM генотип - норма (100% активности A1AT)"),
                    ("CT", "carrier", "MZ генотип - носитель (~60% активности, избегать курения!)"),
                    ("TC", "carrier", "MZ генотип - носитель (~60% активности, избегать курения!)"),
                    ("TT", "affected", "ZZ генотип - тяжелый дефицит (~15% активности), риск эмфиземы/цирроза"),
                    ("GG", "normal", "Норма"),
                    ("AG", "carrier", "Носитель Z-аллеля"),
                    ("GA", "carrier", "Носитель Z-аллеля"),
                    ("AA", "affected", "ZZ генотип"),
                ],
            },
            SnpDef {
                rsid: "rs17580",
                gene: "SERPINA1",
                description: "Умеренный дефицит A1AT",
                risk_allele: Some("T"),
                mutation: Some("S (p.Glu264Val)"),
                interpretations: &[
                    ("AA", "normal", "Норма - нет S-аллеля"),
                    ("AT", "carrier", "MS генотип - носитель S (~80% активности)"),
                    ("TA", "carrier", "MS генотип - носитель S (~80% активности)"),
                    ("TT", "mild_risk", "SS генотип - умеренный дефицит (~60% активности)"),
                    ("GG", "normal", "Норма"),
                    ("GT", "carrier", "Носитель S-аллеля"),
                    ("TG", "carrier", "Носитель S-аллеля"),
                ],
            },
        ],
    },
    Section {
        key: "phenylketonuria",
        name: "Фенилкетонурия (PKU)",
        inheritance: Some("Аутосомно-рецессивное"),
        frequency: Some("1/50 носителей среди европейцев"),
        snps: &[
            SnpDef {
                rsid: "rs5030858",
                gene: "PAH",
                description: "Частая мутация фенилкетонурии в Восточной Европе",
                risk_allele: Some("A"),
                mutation: Some("R408W (p.Arg408Trp)"),
                interpretations: &[
                    ("GG", "normal", "Норма - нет мутации R408W"),
                    ("AG", "carrier", "Носитель R408W - PKU"),
                    ("GA", "carrier", "Носитель R408W - PKU"),
                    ("AA", "affected", "Гомозигота R408W - фенилкетонурия"),
                    ("CC", "normal", "Норма"),
                    ("CT", "carrier", "Носитель мутации PAH"),
                    ("TC", "carrier", "Носитель мутации PAH"),
                    ("TT", "affected", "Фенилкетонурия"),
                ],
            },
        ],
    },
    Section {
        key: "brca_hereditary_cancer",
        name: "Наследственный рак (BRCA1/BRCA2)",
        inheritance: Some("Аутосомно-доминантное (одной копии достаточно для риска)"),
        frequency: Some("1/40 среди ашкеназских евреев, 1/400-500 в общей популяции"),
        snps: &[
            SnpDef {
                rsid: "rs80357906",
                gene: "BRCA1",
                description: "Основатель мутация BRCA1 - высокий риск рака груди/яичников",
                risk_allele: Some("del"),
                mutation: Some("185delAG (c.68_69delAG)"),
                interpretations: &[
                    ("--", "high_risk", "Носитель 185delAG - высокий риск рака груди (до 80%) и яичников (до 40%)"),
                    ("AG", "normal", "Норма - нет мутации 185delAG"),
                    ("GA", "normal", "Норма"),
                    ("AA", "normal", "Норма"),
                    ("GG", "normal", "Норма"),
                    ("A-", "high_risk", "Носитель делеции BRCA1"),
                    ("-A", "high_risk", "Носитель делеции BRCA1"),
                    ("G-", "high_risk", "Носитель делеции BRCA1"),
                    ("-G", "high_risk", "Носитель делеции BRCA1"),
                    ("II", "normal", "Норма - инсерция"),
                    ("DI", "high_risk", "Носитель делеции"),
                    ("ID", "high_risk", "Носитель делеции"),
                    ("DD", "high_risk", "Гомозигота - требуется генетическое консультирование"),
                ],
            },
            SnpDef {
                rsid: "rs80359550",
                gene: "BRCA2",
                description: "Основатель мутация BRCA2 - высокий риск рака груди",
                risk_allele: Some("del"),
                mutation: Some("6174delT (c.5946delT)"),
                interpretations: &[
                    ("--", "high_risk", "Носитель 6174delT - высокий риск рака груди и простаты"),
                    ("TT", "normal", "Норма - нет делеции 6174delT"),
                    ("T-", "high_risk", "Носитель делеции BRCA2"),
                    ("-T", "high_risk", "Носитель делеции BRCA2"),
                    ("AA", "normal", "Норма"),
                    ("CC", "normal", "Норма"),
                    ("GG", "normal", "Норма"),
                    ("II", "normal", "Норма"),
                    ("DI", "high_risk", "Носитель делеции"),
                    ("ID", "high_risk", "Носитель делеции"),
                    ("DD", "high_risk", "Гомозигота по делеции"),
                ],
            },
        ],
    },
];

/// Family-planning notes shown when a condition has carrier findings
static FAMILY_PLANNING_NOTES: &[(&str, &str)] = &[
    ("cystic_fibrosis", "**Семейное планирование при носительстве муковисцидоза:**\n- Если оба партнера носители: 25% риск рождения ребенка с муковисцидозом\n- Рекомендуется тестирование партнера перед беременностью\n- Доступны ПГД (преимплантационная диагностика) и пренатальная диагностика\n- Заболевание серьезное, но лечение значительно улучшилось"),
    ("sickle_cell", "**Семейное планирование при носительстве серповидноклеточной анемии:**\n- Носительство (AT) дает защиту от малярии без симптомов болезни\n- Если оба партнера носители: 25% риск серповидноклеточной анемии у ребенка\n- Тестирование партнера обязательно рекомендуется\n- Неонатальный скрининг выявляет болезнь при рождении"),
    ("tay_sachs", "**Семейное планирование при носительстве болезни Тея-Сакса:**\n- Особенно важно для пар ашкеназского происхождения\n- Если оба носители: 25% риск болезни Тея-Сакса (летальная в детстве)\n- Обязательно тестирование партнера\n- ПГД позволяет предотвратить рождение больного ребенка"),
    ("gaucher", "**Семейное планирование при носительстве болезни Гоше:**\n- Тип 1 (N370S) - наиболее мягкий, совместим с нормальной жизнью\n- Если оба носители: 25% риск болезни Гоше\n- Существует эффективная ферментозаместительная терапия\n- Тестирование партнера рекомендуется, особенно для ашкеназских евреев"),
    ("hearing_loss", "**Семейное планирование при носительстве наследственной глухоты:**\n- Если оба партнера носители 35delG: 25% риск глухоты у ребенка\n- Тестирование партнера рекомендуется\n- Глухота не влияет на продолжительность жизни\n- Кохлеарные импланты эффективны при раннем выявлении"),
    ("hemochromatosis", "**Семейное планирование при носительстве/наличии гемохроматоза:**\n- C282Y гомозиготы должны регулярно контролировать ферритин\n- Носители обычно не имеют клинических проявлений\n- Болезнь хорошо поддается лечению (флеботомия)\n- Низкий приоритет для ПГД, так как болезнь управляема"),
    ("alpha1_antitrypsin", "**Семейное планирование при дефиците альфа-1-антитрипсина:**\n- MZ носители: избегать курения и профессиональных вредностей!\n- ZZ генотип: высокий риск эмфиземы, особенно при курении\n- Тестирование партнера рекомендуется\n- Болезнь проявляется во взрослом возрасте, есть терапия"),
    ("phenylketonuria", "**Семейное планирование при носительстве фенилкетонурии:**\n- Если оба носители: 25% риск ФКУ у ребенка\n- Неонатальный скрининг обязателен во всех странах\n- При ранней диагностике и диете - нормальное развитие\n- Женщины с ФКУ должны соблюдать диету ДО и во время беременности"),
    ("brca_hereditary_cancer", "**Семейное планирование при мутациях BRCA1/BRCA2:**\n- ВАЖНО: BRCA мутации доминантные - одной копии достаточно для риска\n- 50% риск передачи мутации каждому ребенку\n- Доступна ПГД для предотвращения передачи мутации\n- Необходимо генетическое консультирование\n- Для носителей: усиленный скрининг, профилактические опции"),
];

/// Table lookup plus the risk-allele fallback for genotypes the authored
/// tables do not list
fn interpret_carrier(def: &SnpDef, genome: &Genome) -> Finding {
    let mut finding = interpret(def, genome);

    if finding.found && finding.tag.is_none() {
        let genotype = finding.genotype.clone().unwrap_or_default();
        let risk = def.risk_allele.unwrap_or("");

        if genotype == "--" || genotype.to_lowercase().contains("del") {
            finding.tag = Some("possible_carrier");
            finding.text = Some("Делеция обнаружена - требуется подтверждение".to_string());
        } else if !risk.is_empty() && genotype.contains(risk) {
            if genotype.matches(risk).count() == 2 {
                finding.tag = Some("affected");
                finding.text = Some(format!("Гомозигота по риск-аллелю {}", risk));
            } else {
                finding.tag = Some("carrier");
                finding.text = Some(format!("Гетерозигота - носитель аллеля {}", risk));
            }
        } else {
            finding.tag = Some("normal");
            finding.text = Some("Риск-аллель не обнаружен".to_string());
        }
    }

    finding
}

/// Status labels for the carrier tables, kept in Latin script as the
/// summary tables expect
pub fn status_label(tag: &str) -> &'static str {
    match tag {
        "normal" => "Normal",
        "carrier" => "CARRIER",
        "affected" => "AFFECTED",
        "high_risk" => "HIGH RISK",
        "mild_risk" => "Mild Risk",
        "possible_carrier" => "Possible Carrier",
        _ => "Unknown",
    }
}

fn family_planning_note(key: &str) -> Option<&'static str> {
    FAMILY_PLANNING_NOTES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, note)| *note)
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections: Vec<SectionResult> = SECTIONS
        .iter()
        .map(|section| SectionResult {
            key: section.key,
            name: section.name,
            inheritance: section.inheritance,
            frequency: section.frequency,
            findings: section
                .snps
                .iter()
                .map(|def| interpret_carrier(def, genome))
                .collect(),
        })
        .collect();

    let mut specials = Vec::new();

    // Carrier summary across all conditions
    let mut carriers = Vec::new();
    let mut critical = Vec::new();
    let mut normal_count = 0usize;
    let mut not_found_count = 0usize;

    for section in &sections {
        for f in &section.findings {
            if !f.found {
                not_found_count += 1;
                continue;
            }
            match f.tag {
                Some("carrier") => carriers.push((section.name, f)),
                Some("affected") | Some("high_risk") => critical.push((section.name, f)),
                Some("normal") | Some("mild_risk") => normal_count += 1,
                _ => {}
            }
        }
    }

    let mut summary = String::new();
    if !critical.is_empty() {
        summary.push_str("**Критические находки - необходима консультация генетика!**\n\n");
        for (name, f) in &critical {
            summary.push_str(&format!(
                "- **{}**: {} {} - генотип **{}**, статус **{}**\n  - {}\n",
                name,
                f.gene,
                f.mutation.unwrap_or("-"),
                f.genotype.as_deref().unwrap_or("-"),
                status_label(f.tag.unwrap_or("")),
                f.text.as_deref().unwrap_or("")
            ));
        }
        summary.push('\n');
    }
    if !carriers.is_empty() {
        summary.push_str("**Обнаружено носительство:**\n\n");
        for (name, f) in &carriers {
            summary.push_str(&format!(
                "- **{}**: {} {} - генотип **{}**\n  - {}\n",
                name,
                f.gene,
                f.mutation.unwrap_or("-"),
                f.genotype.as_deref().unwrap_or("-"),
                f.text.as_deref().unwrap_or("")
            ));
        }
        summary.push('\n');
    }
    summary.push_str(&format!(
        "- Всего проанализировано заболеваний: {}\n- Нормальных результатов: {}\n- Носительство обнаружено: {}\n- Повышенный риск/болезнь: {}\n- SNP не найдено в геноме: {}",
        sections.len(),
        normal_count,
        carriers.len(),
        critical.len(),
        not_found_count
    ));
    specials.push(SpecialSection {
        heading: "Сводка по носительству".to_string(),
        markdown: summary,
    });

    // Family planning notes for conditions with findings
    for section in &sections {
        let has_findings = section.findings.iter().any(|f| {
            f.found && matches!(f.tag, Some("carrier") | Some("affected") | Some("high_risk"))
        });
        if has_findings {
            if let Some(note) = family_planning_note(section.key) {
                specials.push(SpecialSection {
                    heading: format!("Семейное планирование: {}", section.name),
                    markdown: note.to_string(),
                });
            }
        }
    }

    specials.push(SpecialSection {
        heading: "Ограничения анализа".to_string(),
        markdown: "1. 23andMe тестирует только определённые мутации - отрицательный результат не гарантирует отсутствия носительства\n\
                   2. Для полного анализа носительства рекомендуется расширенная панель (100+ заболеваний) в клинической лаборатории\n\
                   3. Этот отчёт только для информационных целей и требует интерпретации генетиком"
            .to_string(),
    });

    PanelReport {
        key: "carrier",
        title: "Носительство наследственных заболеваний",
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
                    chromosome: "7".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn cftr_no_call_reads_as_deletion_carrier() {
        // the F508del table keys "--" explicitly
        let report = run(&genome_with(&[("rs113993960", "--")]));
        let finding = report.findings().find(|f| f.rsid == "rs113993960").unwrap();
        assert_eq!(finding.tag, Some("carrier"));
    }

    #[test]
    fn fallback_counts_risk_alleles_for_unlisted_genotypes() {
        // rs334 CT is outside the authored table; the fallback sees one
        // copy of the risk allele T
        let report = run(&genome_with(&[("rs334", "CT")]));
        let finding = report.findings().find(|f| f.rsid == "rs334").unwrap();
        assert_eq!(finding.tag, Some("carrier"));
        assert_eq!(
            finding.text.as_deref(),
            Some("Гетерозигота - носитель аллеля T")
        );
    }

    #[test]
    fn fallback_sees_single_risk_allele_in_unlisted_genotype() {
        // rs1800562 CA is outside the table; one copy of risk allele A
        let report = run(&genome_with(&[("rs1800562", "CA")]));
        let finding = report.findings().find(|f| f.rsid == "rs1800562").unwrap();
        assert_eq!(finding.tag, Some("carrier"));
    }

    #[test]
    fn unlisted_genotype_without_risk_allele_is_normal() {
        // hemochromatosis rs1800562 risk allele A; GG is authored normal,
        // so use a genotype outside the table with no risk allele
        let report = run(&genome_with(&[("rs1800562", "CC")]));
        let finding = report.findings().find(|f| f.rsid == "rs1800562").unwrap();
        assert_eq!(finding.tag, Some("normal"));
        assert_eq!(finding.text.as_deref(), Some("Риск-аллель не обнаружен"));
    }

    #[test]
    fn carrier_summary_special_is_always_first() {
        let report = run(&Genome::new());
        assert_eq!(report.specials[0].heading, "Сводка по носительству");
    }

    #[test]
    fn family_planning_note_appears_for_carriers() {
        let report = run(&genome_with(&[("rs113993960", "--")]));
        assert!(report
            .specials
            .iter()
            .any(|s| s.heading.starts_with("Семейное планирование")));
    }
}
