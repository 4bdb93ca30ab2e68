//! Health panel: cardiovascular, oncology, metabolic, neurology and
//! pharmacogenomic markers, plus the APOE and MTHFR combination calls.

use crate::types::{Genome, Section, SnpDef};

use super::combos::{apoe_risk_call, mthfr_status};
use super::{analyze_sections, PanelReport, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "cardiovascular",
        name: "Сердечно-сосудистые заболевания",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs10757274",
                gene: "9p21",
                description: "ИБС, инфаркт миокарда",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "high", "Повышенный риск ИБС (гомозигота)"),
                    ("AG", "moderate", "Умеренно повышенный риск ИБС (гетерозигота)"),
                    ("AA", "normal", "Нормальный риск"),
                ],
            },
            SnpDef {
                rsid: "rs1333049",
                gene: "9p21",
                description: "ИБС, коронарная болезнь сердца",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Повышенный риск ИБС"),
                    ("CG", "moderate", "Умеренно повышенный риск"),
                    ("GG", "normal", "Нормальный риск"),
                ],
            },
            SnpDef {
                rsid: "rs1801133",
                gene: "MTHFR C677T",
                description: "Гомоцистеин, риск тромбов",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Сниженная активность MTHFR (~30%), повышен гомоцистеин"),
                    ("CT", "moderate", "Умеренно сниженная активность (~65%)"),
                    ("AG", "moderate", "Гетерозигота C677T - умеренно сниженная активность (~65%)"),
                    ("CC", "normal", "Нормальная активность MTHFR"),
                    ("AA", "normal", "Нормальная активность MTHFR"),
                ],
            },
            SnpDef {
                rsid: "rs1801131",
                gene: "MTHFR A1298C",
                description: "Метаболизм фолатов",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "Сниженная активность MTHFR"),
                    ("AC", "low", "Незначительное снижение"),
                    ("GT", "normal", "Нормальная активность A1298C"),
                    ("TT", "normal", "Нормальная активность"),
                    ("AA", "normal", "Нормальная активность"),
                ],
            },
            SnpDef {
                rsid: "rs6025",
                gene: "Factor V Leiden",
                description: "Тромбофилия",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Фактор V Лейден - высокий риск тромбозов!"),
                    ("AG", "high", "Носитель Factor V Leiden - повышенный риск тромбозов"),
                    ("AC", "high", "Носитель Factor V Leiden - повышенный риск тромбозов"),
                    ("GG", "normal", "Нет мутации Factor V Leiden"),
                    ("CC", "normal", "Нет мутации Factor V Leiden"),
                    ("CG", "normal", "Нет мутации Factor V Leiden"),
                ],
            },
            SnpDef {
                rsid: "rs1799963",
                gene: "Prothrombin G20210A",
                description: "Тромбозы венозные",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Гомозигота - высокий риск тромбозов"),
                    ("AG", "high", "Носитель - повышенный риск тромбозов"),
                    ("GG", "normal", "Нет мутации протромбина"),
                ],
            },
            SnpDef {
                rsid: "rs1800562",
                gene: "HFE C282Y",
                description: "Гемохроматоз (накопление железа)",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Гомозигота C282Y - высокий риск гемохроматоза"),
                    ("AG", "moderate", "Носитель C282Y"),
                    ("GG", "normal", "Нет мутации C282Y"),
                ],
            },
        ],
    },
    Section {
        key: "oncology",
        name: "Онкологические маркеры",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1042522",
                gene: "TP53 Arg72Pro",
                description: "Общий риск рака",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "Pro/Pro - немного повышен риск некоторых раков"),
                    ("CG", "normal", "Arg/Pro - гетерозигота"),
                    ("GG", "normal", "Arg/Arg - стандартный вариант"),
                ],
            },
            SnpDef {
                rsid: "rs1800566",
                gene: "NQO1",
                description: "Детоксикация канцерогенов",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Нет активности NQO1 - сниженная детоксикация"),
                    ("CT", "moderate", "Сниженная активность NQO1"),
                    ("CC", "normal", "Нормальная детоксикация"),
                ],
            },
            SnpDef {
                rsid: "rs1695",
                gene: "GSTP1",
                description: "Детоксикация",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "moderate", "Сниженная детоксикация через GSTP1"),
                    ("AG", "low", "Немного сниженная активность"),
                    ("AA", "normal", "Нормальная активность GSTP1"),
                ],
            },
            SnpDef {
                rsid: "rs1048943",
                gene: "CYP1A1",
                description: "Метаболизм канцерогенов",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "moderate", "Повышенная активация канцерогенов"),
                    ("AG", "low", "Немного повышена"),
                    ("AA", "normal", "Нормальный метаболизм"),
                ],
            },
        ],
    },
    Section {
        key: "neurology",
        name: "Неврология и психическое здоровье",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs429358",
                gene: "APOE (ε4 маркер 1)",
                description: "Болезнь Альцгеймера",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Вероятно ε4/ε4 - значительно повышен риск"),
                    ("CT", "moderate", "Вероятно носитель ε4"),
                    ("TT", "normal", "Нет аллеля ε4"),
                ],
            },
            SnpDef {
                rsid: "rs7412",
                gene: "APOE (ε маркер 2)",
                description: "Болезнь Альцгеймера",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "info", "Используется для определения APOE генотипа"),
                    ("CT", "info", "Используется для определения APOE генотипа"),
                    ("TT", "info", "Используется для определения APOE генотипа"),
                ],
            },
            SnpDef {
                rsid: "rs6265",
                gene: "BDNF Val66Met",
                description: "Память, нейропластичность, депрессия",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "moderate", "Met/Met - сниженная секреция BDNF, риск депрессии"),
                    ("TT", "moderate", "Met/Met - сниженная секреция BDNF, риск депрессии"),
                    ("AG", "low", "Val/Met - немного сниженная секреция"),
                    ("CT", "low", "Val/Met - немного сниженная секреция"),
                    ("GG", "normal", "Val/Val - нормальная секреция BDNF"),
                    ("CC", "normal", "Val/Val - нормальная секреция BDNF"),
                ],
            },
            SnpDef {
                rsid: "rs4680",
                gene: "COMT Val158Met",
                description: "Стресс, тревожность, когнитивные функции",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "info", "Met/Met - 'Worrier' - лучше когнитивно, но выше тревожность"),
                    ("AG", "info", "Val/Met - сбалансированный тип"),
                    ("GG", "info", "Val/Val - 'Warrior' - устойчив к стрессу, хуже память"),
                ],
            },
            SnpDef {
                rsid: "rs1800497",
                gene: "DRD2/ANKK1 Taq1A",
                description: "Дофамин, зависимости",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "moderate", "A1/A1 - меньше D2 рецепторов, риск зависимостей"),
                    ("AG", "low", "A1/A2 - умеренно снижены D2 рецепторы"),
                    ("GG", "normal", "A2/A2 - нормальное количество D2 рецепторов"),
                ],
            },
            SnpDef {
                rsid: "rs53576",
                gene: "OXTR",
                description: "Окситоцин, эмпатия, социальность",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "info", "Ниже эмпатия и социальная чувствительность"),
                    ("AG", "info", "Средний уровень"),
                    ("GG", "info", "Выше эмпатия и социальная чувствительность"),
                ],
            },
        ],
    },
    Section {
        key: "diabetes",
        name: "Диабет и метаболизм",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs7903146",
                gene: "TCF7L2",
                description: "Диабет 2 типа (главный маркер)",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Значительно повышен риск СД2 (~80%)"),
                    ("CT", "moderate", "Повышен риск СД2 (~40%)"),
                    ("CC", "normal", "Нормальный риск"),
                ],
            },
            SnpDef {
                rsid: "rs1801282",
                gene: "PPARG Pro12Ala",
                description: "Инсулин, ожирение",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Pro/Pro - стандартный вариант"),
                    ("CG", "protective", "Pro/Ala - защитный эффект против СД2"),
                    ("GG", "protective", "Ala/Ala - защитный эффект"),
                ],
            },
            SnpDef {
                rsid: "rs5219",
                gene: "KCNJ11",
                description: "Диабет 2 типа",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Повышен риск СД2"),
                    ("CT", "low", "Немного повышен риск"),
                    ("CC", "normal", "Нормальный риск"),
                ],
            },
            SnpDef {
                rsid: "rs9939609",
                gene: "FTO",
                description: "Ожирение (главный маркер)",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Повышен риск ожирения (+3кг в среднем)"),
                    ("AT", "moderate", "Умеренно повышен риск (+1.5кг)"),
                    ("TT", "normal", "Нормальный риск"),
                ],
            },
            SnpDef {
                rsid: "rs17782313",
                gene: "MC4R",
                description: "Аппетит, ожирение",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "Повышен аппетит и риск ожирения"),
                    ("CT", "low", "Немного повышен риск"),
                    ("TT", "normal", "Нормальный контроль аппетита"),
                ],
            },
        ],
    },
    Section {
        key: "autoimmune",
        name: "Аутоиммунные заболевания",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs2187668",
                gene: "HLA-DQ2.5",
                description: "Целиакия",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "HLA-DQ2.5 - высокий риск целиакии"),
                    ("CT", "moderate", "Носитель HLA-DQ2.5"),
                    ("CC", "normal", "Низкий риск целиакии"),
                ],
            },
            SnpDef {
                rsid: "rs7454108",
                gene: "HLA-DQ8",
                description: "Целиакия, диабет 1 типа",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "HLA-DQ8 - риск целиакии и СД1"),
                    ("CT", "low", "Носитель"),
                    ("TT", "normal", "Низкий риск"),
                ],
            },
            SnpDef {
                rsid: "rs2476601",
                gene: "PTPN22",
                description: "Аутоиммунные (RA, SLE, СД1)",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Высокий риск аутоиммунных заболеваний"),
                    ("AG", "moderate", "Повышен риск аутоиммунных"),
                    ("GG", "normal", "Нормальный риск"),
                ],
            },
            SnpDef {
                rsid: "rs3135388",
                gene: "HLA-DRB1",
                description: "Рассеянный склероз",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "moderate", "Повышен риск рассеянного склероза"),
                    ("AG", "low", "Немного повышен риск"),
                    ("GG", "normal", "Нормальный риск"),
                ],
            },
        ],
    },
    Section {
        key: "pharmacogenomics",
        name: "Фармакогеномика",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4244285",
                gene: "CYP2C19*2",
                description: "Метаболизм: Клопидогрел, омепразол, антидепрессанты",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Плохой метаболизатор - клопидогрел НЕ эффективен!"),
                    ("AG", "moderate", "Промежуточный метаболизатор"),
                    ("GG", "normal", "Нормальный метаболизатор"),
                ],
            },
            SnpDef {
                rsid: "rs4986893",
                gene: "CYP2C19*3",
                description: "Метаболизм антидепрессантов",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Плохой метаболизатор"),
                    ("AG", "moderate", "Промежуточный"),
                    ("GG", "normal", "Нормальный метаболизатор"),
                ],
            },
            SnpDef {
                rsid: "rs1065852",
                gene: "CYP2D6",
                description: "Метаболизм: Кодеин, тамоксифен, антидепрессанты",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Плохой метаболизатор - кодеин не работает"),
                    ("AG", "moderate", "Промежуточный метаболизатор"),
                    ("GG", "normal", "Нормальный метаболизатор"),
                ],
            },
            SnpDef {
                rsid: "rs9923231",
                gene: "VKORC1",
                description: "Чувствительность к Варфарину",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Высокая чувствительность - нужна низкая доза варфарина"),
                    ("CT", "moderate", "Средняя чувствительность"),
                    ("CC", "normal", "Стандартная доза варфарина"),
                ],
            },
            SnpDef {
                rsid: "rs1799853",
                gene: "CYP2C9*2",
                description: "Метаболизм: Варфарин, НПВС",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Плохой метаболизатор - снизить дозу варфарина"),
                    ("CT", "moderate", "Промежуточный метаболизатор"),
                    ("CC", "normal", "Нормальный метаболизатор"),
                ],
            },
            SnpDef {
                rsid: "rs1057910",
                gene: "CYP2C9*3",
                description: "Метаболизм варфарина",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Плохой метаболизатор"),
                    ("AC", "moderate", "Промежуточный"),
                    ("AA", "normal", "Нормальный метаболизатор"),
                ],
            },
            SnpDef {
                rsid: "rs4149056",
                gene: "SLCO1B1",
                description: "Транспорт статинов (риск миопатии)",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Высокий риск миопатии от статинов!"),
                    ("CT", "moderate", "Повышен риск миопатии"),
                    ("TT", "normal", "Нормальный риск"),
                ],
            },
            SnpDef {
                rsid: "rs1800460",
                gene: "TPMT",
                description: "Метаболизм азатиоприна",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "high", "Плохой метаболизатор - токсичность азатиоприна!"),
                    ("TT", "high", "Плохой метаболизатор - токсичность азатиоприна!"),
                    ("AG", "moderate", "Промежуточный - снизить дозу"),
                    ("CT", "moderate", "Промежуточный - снизить дозу"),
                    ("GG", "normal", "Нормальный метаболизатор"),
                    ("CC", "normal", "Нормальный метаболизатор"),
                ],
            },
        ],
    },
    Section {
        key: "other",
        name: "Другие важные маркеры",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800629",
                gene: "TNF-α",
                description: "Воспаление",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "moderate", "Повышенная продукция TNF-α, хроническое воспаление"),
                    ("AG", "low", "Немного повышена"),
                    ("GG", "normal", "Нормальный уровень"),
                ],
            },
            SnpDef {
                rsid: "rs1143634",
                gene: "IL-1β",
                description: "Воспаление",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Повышенное воспаление"),
                    ("CT", "low", "Немного повышено"),
                    ("AG", "low", "Немного повышена продукция IL-1β"),
                    ("CC", "normal", "Нормальный уровень"),
                    ("AA", "normal", "Нормальный уровень"),
                ],
            },
            SnpDef {
                rsid: "rs1800795",
                gene: "IL-6",
                description: "Воспаление, иммунитет",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "Повышенная продукция IL-6"),
                    ("CG", "low", "Умеренно повышена"),
                    ("GG", "normal", "Нормальный уровень"),
                ],
            },
            SnpDef {
                rsid: "rs7041",
                gene: "GC (VDBP)",
                description: "Метаболизм витамина D",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Gc1F/1F - сниженный уровень витамина D"),
                    ("GT", "low", "Немного снижен"),
                    ("AC", "low", "Gc1S/1F - немного снижен витамин D"),
                    ("GG", "normal", "Gc1S/1S - нормальный уровень"),
                    ("AA", "normal", "Нормальный уровень"),
                    ("CC", "normal", "Нормальный уровень"),
                ],
            },
            SnpDef {
                rsid: "rs2282679",
                gene: "GC",
                description: "Уровень витамина D",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "moderate", "Сниженный витамин D"),
                    ("AC", "low", "Немного снижен"),
                    ("GT", "low", "Немного снижен уровень витамина D"),
                    ("GG", "normal", "Нормальный уровень"),
                    ("TT", "normal", "Нормальный уровень"),
                    ("AA", "normal", "Нормальный уровень"),
                ],
            },
            SnpDef {
                rsid: "rs855791",
                gene: "TMPRSS6",
                description: "Уровень железа",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "moderate", "Сниженный уровень железа"),
                    ("CT", "low", "Немного снижен"),
                    ("AG", "low", "Немного снижен уровень железа"),
                    ("GG", "normal", "Нормальный уровень железа"),
                    ("AA", "normal", "Нормальный уровень"),
                    ("CC", "normal", "Нормальный уровень"),
                ],
            },
            SnpDef {
                rsid: "rs1799945",
                gene: "HFE H63D",
                description: "Гемохроматоз (лёгкая форма)",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "moderate", "H63D гомозигота - лёгкий риск накопления железа"),
                    ("CG", "low", "Носитель H63D"),
                    ("CC", "normal", "Нет мутации H63D"),
                ],
            },
        ],
    },
];

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);

    let mut specials = Vec::new();

    let apoe = apoe_risk_call(genome);
    specials.push(SpecialSection {
        heading: "APOE генотип (риск Альцгеймера)".to_string(),
        markdown: format!(
            "- rs429358: {}\n- rs7412: {}\n- **APOE генотип: {}**\n- Риск: {}\n- {}",
            apoe.rs429358, apoe.rs7412, apoe.genotype, apoe.tag, apoe.text
        ),
    });

    let findings: Vec<_> = sections.iter().flat_map(|s| s.findings.iter().cloned()).collect();
    if let Some(mthfr) = mthfr_status(&findings) {
        specials.push(SpecialSection {
            heading: "MTHFR статус".to_string(),
            markdown: format!(
                "- C677T (rs1801133): {}\n- A1298C (rs1801131): {}\n- **Статус: {}**\n- {}",
                mthfr.c677t, mthfr.a1298c, mthfr.status, mthfr.text
            ),
        });
    }

    PanelReport {
        key: "health",
        title: "Здоровье",
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
                    chromosome: "1".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn factor_v_leiden_carrier_is_flagged_high() {
        let report = run(&genome_with(&[("rs6025", "AG")]));
        let finding = report.findings().find(|f| f.rsid == "rs6025").unwrap();
        assert_eq!(finding.tag, Some("high"));
    }

    #[test]
    fn mthfr_special_needs_both_snps() {
        let report = run(&genome_with(&[("rs1801133", "CT")]));
        assert!(report.specials.iter().all(|s| s.heading != "MTHFR статус"));

        let report = run(&genome_with(&[("rs1801133", "CT"), ("rs1801131", "AA")]));
        assert!(report.specials.iter().any(|s| s.heading == "MTHFR статус"));
    }

    #[test]
    fn apoe_special_is_always_present() {
        let report = run(&Genome::new());
        assert!(report.specials.iter().any(|s| s.heading.starts_with("APOE")));
    }
}
