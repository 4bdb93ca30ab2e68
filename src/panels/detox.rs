//! Detoxification panel: phase I/II enzymes, methylation, alcohol and
//! heavy-metal handling, with combined NAT2 / CYP2C19 / alcohol calls.

use serde::Serialize;

use crate::types::{Finding, Genome, Section, SnpDef};

use super::combos::mthfr_status;
use super::{analyze_sections, PanelReport, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "phase1_cyp450",
        name: "Фаза I детоксикации CYP450",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs762551",
                gene: "CYP1A2",
                description: "Метаболизм кофеина",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("AA", "fast", "Быстрый метаболизатор кофеина - кофеин выводится быстро"),
                    ("AC", "intermediate", "Средний метаболизатор кофеина"),
                    ("CA", "intermediate", "Средний метаболизатор кофеина"),
                    ("CC", "slow", "Медленный метаболизатор кофеина - кофеин задерживается дольше"),
                ],
            },
            SnpDef {
                rsid: "rs1056836",
                gene: "CYP1B1",
                description: "Метаболизм эстрогенов",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("GG", "high", "Повышенное образование 4-OH эстрогенов (более канцерогенных)"),
                    ("CG", "moderate", "Умеренно повышенное образование 4-OH эстрогенов"),
                    ("GC", "moderate", "Умеренно повышенное образование 4-OH эстрогенов"),
                    ("CC", "normal", "Нормальный метаболизм эстрогенов (больше 2-OH)"),
                ],
            },
            SnpDef {
                rsid: "rs1799853",
                gene: "CYP2C9*2",
                description: "Метаболизм НПВС, варфарина",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "slow", "Медленный метаболизатор - снизить дозу НПВС/варфарина"),
                    ("CT", "intermediate", "Промежуточный метаболизатор"),
                    ("TC", "intermediate", "Промежуточный метаболизатор"),
                    ("CC", "normal", "Нормальный метаболизатор CYP2C9"),
                ],
            },
            SnpDef {
                rsid: "rs1057910",
                gene: "CYP2C9*3",
                description: "Метаболизм НПВС, варфарина",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("CC", "slow", "Медленный метаболизатор - значительно снизить дозу"),
                    ("AC", "intermediate", "Промежуточный метаболизатор"),
                    ("CA", "intermediate", "Промежуточный метаболизатор"),
                    ("AA", "normal", "Нормальный метаболизатор CYP2C9*3"),
                ],
            },
            SnpDef {
                rsid: "rs4244285",
                gene: "CYP2C19*2",
                description: "Метаболизм: клопидогрел, омепразол, антидепрессанты",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "slow", "Плохой метаболизатор - клопидогрел НЕ эффективен!"),
                    ("AG", "intermediate", "Промежуточный метаболизатор"),
                    ("GA", "intermediate", "Промежуточный метаболизатор"),
                    ("GG", "normal", "Нормальный метаболизатор CYP2C19"),
                ],
            },
            SnpDef {
                rsid: "rs12248560",
                gene: "CYP2C19*17",
                description: "Ультрабыстрый метаболизм",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("TT", "ultrafast", "Ультрабыстрый метаболизатор - может потребоваться увеличение дозы"),
                    ("CT", "fast", "Быстрый метаболизатор"),
                    ("TC", "fast", "Быстрый метаболизатор"),
                    ("CC", "normal", "Нормальный метаболизатор CYP2C19"),
                ],
            },
        ],
    },
    Section {
        key: "phase2_conjugation",
        name: "Фаза II конъюгация",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1695",
                gene: "GSTP1",
                description: "Глутатион S-трансфераза - детоксикация через глутатион",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("AA", "normal", "Нормальная активность GSTP1 - эффективная детоксикация"),
                    ("AG", "moderate", "Немного сниженная активность GSTP1"),
                    ("GA", "moderate", "Немного сниженная активность GSTP1"),
                    ("GG", "low", "Сниженная активность GSTP1 - менее эффективная детоксикация"),
                ],
            },
            SnpDef {
                rsid: "rs1801280",
                gene: "NAT2",
                description: "N-ацетилтрансфераза 2 - ацетилирование",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "slow", "Медленный ацетилятор - повышен риск токсичности изониазида"),
                    ("AG", "intermediate", "Промежуточный ацетилятор"),
                    ("GA", "intermediate", "Промежуточный ацетилятор"),
                    ("GG", "fast", "Быстрый ацетилятор"),
                ],
            },
            SnpDef {
                rsid: "rs1799930",
                gene: "NAT2",
                description: "N-ацетилтрансфераза 2 - вторая мутация",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("AA", "slow", "Медленный ацетилятор"),
                    ("AG", "intermediate", "Промежуточный ацетилятор"),
                    ("GA", "intermediate", "Промежуточный ацетилятор"),
                    ("GG", "fast", "Быстрый ацетилятор"),
                ],
            },
            SnpDef {
                rsid: "rs8175347",
                gene: "UGT1A1*28",
                description: "Синдром Жильбера - конъюгация билирубина",
                risk_allele: Some("TA7"),
                mutation: None,
                interpretations: &[
                    ("6/6", "normal", "Нормальная активность UGT1A1"),
                    ("6/7", "moderate", "Носитель - умеренно сниженная конъюгация билирубина"),
                    ("7/7", "low", "Синдром Жильбера - желтуха при стрессе/голодании"),
                    ("AA", "normal", "Вероятно нормальная активность UGT1A1"),
                    ("AT", "moderate", "Вероятно носитель UGT1A1*28"),
                    ("TA", "moderate", "Вероятно носитель UGT1A1*28"),
                    ("TT", "low", "Вероятно синдром Жильбера"),
                ],
            },
        ],
    },
    Section {
        key: "antioxidants",
        name: "Антиоксидантная защита",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4880",
                gene: "SOD2 (MnSOD)",
                description: "Супероксиддисмутаза - митохондриальная защита",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Высокая активность SOD2 - эффективная защита митохондрий"),
                    ("CT", "moderate", "Средняя активность SOD2"),
                    ("TC", "moderate", "Средняя активность SOD2"),
                    ("TT", "low", "Низкая активность SOD2 - нужны антиоксиданты"),
                    ("AA", "low", "Низкая активность SOD2 (Ala/Ala) - нужны антиоксиданты"),
                    ("AG", "moderate", "Средняя активность SOD2"),
                    ("GA", "moderate", "Средняя активность SOD2"),
                    ("GG", "high", "Высокая активность SOD2"),
                ],
            },
            SnpDef {
                rsid: "rs1050450",
                gene: "GPX1",
                description: "Глутатионпероксидаза - защита от перекисей",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нормальная активность GPX1"),
                    ("CT", "moderate", "Немного сниженная активность GPX1"),
                    ("TC", "moderate", "Немного сниженная активность GPX1"),
                    ("TT", "low", "Сниженная активность GPX1 - нужен селен"),
                ],
            },
            SnpDef {
                rsid: "rs1001179",
                gene: "CAT",
                description: "Каталаза - разложение перекиси водорода",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Нормальная активность каталазы"),
                    ("CT", "moderate", "Немного сниженная активность каталазы"),
                    ("TC", "moderate", "Немного сниженная активность каталазы"),
                    ("TT", "low", "Сниженная активность каталазы"),
                ],
            },
        ],
    },
    Section {
        key: "methylation",
        name: "Метилирование",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1801133",
                gene: "MTHFR C677T",
                description: "Метилентетрагидрофолатредуктаза - ключевой фермент",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "100% активность MTHFR - нормальное метилирование"),
                    ("CT", "moderate", "~65% активность MTHFR - немного снижено метилирование"),
                    ("TC", "moderate", "~65% активность MTHFR - немного снижено метилирование"),
                    ("TT", "low", "~30% активность MTHFR - значительно снижено метилирование"),
                    ("AA", "normal", "Нормальная активность MTHFR"),
                    ("AG", "moderate", "Гетерозигота C677T - умеренно сниженная активность (~65%)"),
                    ("GA", "moderate", "Гетерозигота C677T - умеренно сниженная активность (~65%)"),
                    ("GG", "normal", "Нормальная активность MTHFR"),
                ],
            },
            SnpDef {
                rsid: "rs1801131",
                gene: "MTHFR A1298C",
                description: "Вторая мутация MTHFR",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("AA", "normal", "Нормальная активность A1298C"),
                    ("AC", "low", "Незначительное снижение активности"),
                    ("CA", "low", "Незначительное снижение активности"),
                    ("CC", "moderate", "Сниженная активность MTHFR"),
                    ("TT", "normal", "Нормальная активность"),
                    ("GT", "normal", "Нормальная активность A1298C"),
                    ("TG", "normal", "Нормальная активность A1298C"),
                    ("GG", "moderate", "Сниженная активность A1298C"),
                ],
            },
            SnpDef {
                rsid: "rs1805087",
                gene: "MTR (MS)",
                description: "Метионин синтаза - B12-зависимое метилирование",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("AA", "normal", "Нормальная активность MTR"),
                    ("AG", "moderate", "Немного сниженная активность MTR - нужен B12"),
                    ("GA", "moderate", "Немного сниженная активность MTR - нужен B12"),
                    ("GG", "low", "Сниженная активность MTR - нужен B12"),
                ],
            },
            SnpDef {
                rsid: "rs1801394",
                gene: "MTRR",
                description: "Метионин синтаза редуктаза - регенерация B12",
                risk_allele: Some("G"),
                mutation: None,
                interpretations: &[
                    ("AA", "normal", "Нормальная активность MTRR"),
                    ("AG", "moderate", "Немного сниженная регенерация B12"),
                    ("GA", "moderate", "Немного сниженная регенерация B12"),
                    ("GG", "low", "Сниженная регенерация B12 - нужен метил-B12"),
                ],
            },
        ],
    },
    Section {
        key: "heavy_metals",
        name: "Тяжёлые металлы",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs662",
                gene: "PON1 Q192R",
                description: "Параоксоназа - детоксикация пестицидов и ртути",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальная активность PON1 - хорошая защита от пестицидов"),
                    ("AG", "moderate", "Умеренно сниженная активность PON1"),
                    ("GA", "moderate", "Умеренно сниженная активность PON1"),
                    ("AA", "low", "Сниженная активность PON1 - уязвимость к пестицидам/ртути"),
                ],
            },
            SnpDef {
                rsid: "rs11191439",
                gene: "AS3MT",
                description: "Арсенит метилтрансфераза - метаболизм мышьяка",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "normal", "Эффективное выведение мышьяка"),
                    ("CT", "moderate", "Умеренно сниженное выведение мышьяка"),
                    ("TC", "moderate", "Умеренно сниженное выведение мышьяка"),
                    ("TT", "low", "Сниженное выведение мышьяка - избегать экспозиции"),
                ],
            },
        ],
    },
    Section {
        key: "transporters",
        name: "Транспортёры",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1045642",
                gene: "ABCB1 (MDR1/P-гликопротеин)",
                description: "Выведение токсинов и лекарств из клеток",
                risk_allele: Some("T"),
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Высокая активность P-гликопротеина - быстрое выведение"),
                    ("CT", "normal", "Нормальная активность P-гликопротеина"),
                    ("TC", "normal", "Нормальная активность P-гликопротеина"),
                    ("TT", "low", "Сниженная активность P-гликопротеина - накопление токсинов"),
                ],
            },
            SnpDef {
                rsid: "rs4149056",
                gene: "SLCO1B1",
                description: "Транспорт статинов в печень",
                risk_allele: Some("C"),
                mutation: None,
                interpretations: &[
                    ("TT", "normal", "Нормальный транспорт статинов"),
                    ("TC", "moderate", "Повышен риск миопатии от статинов (~4x)"),
                    ("CT", "moderate", "Повышен риск миопатии от статинов (~4x)"),
                    ("CC", "high", "Высокий риск миопатии от статинов (~17x) - избегать высоких доз!"),
                ],
            },
        ],
    },
    Section {
        key: "alcohol",
        name: "Алкоголь",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1229984",
                gene: "ADH1B",
                description: "Алкогольдегидрогеназа - окисление алкоголя",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "slow", "Медленное окисление алкоголя - дольше опьянение"),
                    ("AG", "fast", "Быстрое окисление алкоголя - быстрее отрезвление"),
                    ("GA", "fast", "Быстрое окисление алкоголя - быстрее отрезвление"),
                    ("AA", "fast", "Очень быстрое окисление алкоголя"),
                ],
            },
            SnpDef {
                rsid: "rs671",
                gene: "ALDH2",
                description: "Альдегиддегидрогеназа - расщепление ацетальдегида",
                risk_allele: Some("A"),
                mutation: None,
                interpretations: &[
                    ("GG", "normal", "Нормальная активность ALDH2 - хорошая переносимость алкоголя"),
                    ("AG", "low", "Сниженная активность ALDH2 - флашинг, тошнота от алкоголя"),
                    ("GA", "low", "Сниженная активность ALDH2 - флашинг, тошнота от алкоголя"),
                    ("AA", "very_low", "Отсутствие ALDH2 - сильный флашинг, непереносимость алкоголя"),
                ],
            },
        ],
    },
];

fn finding<'a>(findings: &'a [Finding], rsid: &str) -> Option<&'a Finding> {
    findings.iter().find(|f| f.rsid == rsid)
}

fn genotype_or_na(finding: &Finding) -> String {
    if finding.found {
        finding.genotype.clone().unwrap_or_else(|| "н/д".to_string())
    } else {
        "н/д".to_string()
    }
}

/// NAT2 acetylator status from rs1801280 + rs1799930
#[derive(Debug, Clone, Serialize)]
pub struct Nat2Status {
    pub rs1801280: String,
    pub rs1799930: String,
    pub status: &'static str,
    pub text: &'static str,
}

pub fn nat2_status(findings: &[Finding]) -> Option<Nat2Status> {
    let rs1801280 = finding(findings, "rs1801280")?;
    let rs1799930 = finding(findings, "rs1799930")?;

    let mut slow_count = 0;
    for f in [rs1801280, rs1799930] {
        match f.tag {
            Some("slow") => slow_count += 2,
            Some("intermediate") => slow_count += 1,
            _ => {}
        }
    }

    let (status, text): (&'static str, &'static str) = if slow_count >= 3 {
        (
            "slow",
            "Медленный ацетилятор - повышен риск токсичности изониазида, сульфаниламидов",
        )
    } else if slow_count >= 1 {
        ("intermediate", "Промежуточный ацетилятор")
    } else {
        ("fast", "Быстрый ацетилятор")
    };

    Some(Nat2Status {
        rs1801280: genotype_or_na(rs1801280),
        rs1799930: genotype_or_na(rs1799930),
        status,
        text,
    })
}

/// CYP2C19 metabolizer status from *2 (rs4244285) and *17 (rs12248560)
#[derive(Debug, Clone, Serialize)]
pub struct Cyp2c19Status {
    pub rs4244285: String,
    pub rs12248560: String,
    pub status: &'static str,
    pub text: &'static str,
}

pub fn cyp2c19_status(findings: &[Finding]) -> Option<Cyp2c19Status> {
    let star2 = finding(findings, "rs4244285")?;
    let star17 = finding(findings, "rs12248560")?;

    let is_slow = star2.tag == Some("slow");
    let is_intermediate_slow = star2.tag == Some("intermediate");
    let is_ultrafast = star17.tag == Some("ultrafast");
    let is_fast = star17.tag == Some("fast");

    let (status, text): (&'static str, &'static str) = if is_slow {
        ("poor", "Плохой метаболизатор CYP2C19 - клопидогрел неэффективен!")
    } else if is_intermediate_slow && is_ultrafast {
        ("normal", "Нормальный метаболизатор (компенсация)")
    } else if is_intermediate_slow {
        ("intermediate", "Промежуточный метаболизатор CYP2C19")
    } else if is_ultrafast {
        (
            "ultrarapid",
            "Ультрабыстрый метаболизатор CYP2C19 - может потребоваться увеличение дозы",
        )
    } else if is_fast {
        ("rapid", "Быстрый метаболизатор CYP2C19")
    } else {
        ("normal", "Нормальный метаболизатор CYP2C19")
    };

    Some(Cyp2c19Status {
        rs4244285: genotype_or_na(star2),
        rs12248560: genotype_or_na(star17),
        status,
        text,
    })
}

/// Alcohol tolerance from ADH1B (rs1229984) and ALDH2 (rs671)
#[derive(Debug, Clone, Serialize)]
pub struct AlcoholTolerance {
    pub adh1b: String,
    pub aldh2: String,
    pub status: &'static str,
    pub text: &'static str,
}

pub fn alcohol_tolerance(findings: &[Finding]) -> Option<AlcoholTolerance> {
    let adh1b = finding(findings, "rs1229984");
    let aldh2 = finding(findings, "rs671");

    if adh1b.is_none() && aldh2.is_none() {
        return None;
    }

    let adh_fast = adh1b
        .map(|f| matches!(f.tag, Some("fast") | Some("ultrafast")))
        .unwrap_or(false);
    let aldh_low = aldh2
        .map(|f| matches!(f.tag, Some("low") | Some("very_low")))
        .unwrap_or(false);

    let (status, text): (&'static str, &'static str) = if aldh_low {
        ("intolerant", "Непереносимость алкоголя - флашинг, тошнота")
    } else if adh_fast {
        ("sensitive", "Быстрое опьянение, но хорошее расщепление ацетальдегида")
    } else {
        ("normal", "Стандартная переносимость алкоголя")
    };

    Some(AlcoholTolerance {
        adh1b: adh1b.map(genotype_or_na).unwrap_or_else(|| "н/д".to_string()),
        aldh2: aldh2.map(genotype_or_na).unwrap_or_else(|| "н/д".to_string()),
        status,
        text,
    })
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);
    let findings: Vec<_> = sections.iter().flat_map(|s| s.findings.iter().cloned()).collect();

    let mut specials = Vec::new();

    if let Some(mthfr) = mthfr_status(&findings) {
        specials.push(SpecialSection {
            heading: "MTHFR статус (метилирование)".to_string(),
            markdown: format!(
                "- C677T (rs1801133): {}\n- A1298C (rs1801131): {}\n- **Статус: {}**\n- {}",
                mthfr.c677t, mthfr.a1298c, mthfr.status, mthfr.text
            ),
        });
    }

    if let Some(nat2) = nat2_status(&findings) {
        specials.push(SpecialSection {
            heading: "NAT2 статус ацетилирования".to_string(),
            markdown: format!(
                "- rs1801280: {}\n- rs1799930: {}\n- **Статус: {}**\n- {}",
                nat2.rs1801280, nat2.rs1799930, nat2.status, nat2.text
            ),
        });
    }

    if let Some(cyp) = cyp2c19_status(&findings) {
        specials.push(SpecialSection {
            heading: "CYP2C19 статус".to_string(),
            markdown: format!(
                "- *2 (rs4244285): {}\n- *17 (rs12248560): {}\n- **Статус: {}**\n- {}",
                cyp.rs4244285, cyp.rs12248560, cyp.status, cyp.text
            ),
        });
    }

    if let Some(alcohol) = alcohol_tolerance(&findings) {
        specials.push(SpecialSection {
            heading: "Переносимость алкоголя".to_string(),
            markdown: format!(
                "- ADH1B (rs1229984): {}\n- ALDH2 (rs671): {}\n- **Статус: {}**\n- {}",
                alcohol.adh1b, alcohol.aldh2, alcohol.status, alcohol.text
            ),
        });
    }

    PanelReport {
        key: "detox",
        title: "Детоксикация",
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
                    chromosome: "8".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    fn findings_for(genome: &Genome) -> Vec<Finding> {
        run(genome).sections.iter().flat_map(|s| s.findings.clone()).collect()
    }

    #[test]
    fn double_slow_nat2_is_a_slow_acetylator() {
        // rs1801280 AA and rs1799930 AA are both authored as slow
        let genome = genome_with(&[("rs1801280", "AA"), ("rs1799930", "AA")]);
        let status = nat2_status(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "slow");
    }

    #[test]
    fn heterozygous_nat2_is_intermediate() {
        let genome = genome_with(&[("rs1801280", "AG"), ("rs1799930", "GG")]);
        let status = nat2_status(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "intermediate");
    }

    #[test]
    fn aldh2_deficiency_dominates_alcohol_call() {
        // rs671 AA is the inactive ALDH2 variant, even with fast ADH1B
        let genome = genome_with(&[("rs671", "AA"), ("rs1229984", "AA")]);
        let status = alcohol_tolerance(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "intolerant");
    }

    #[test]
    fn fast_adh1b_alone_reads_as_sensitive() {
        let genome = genome_with(&[("rs671", "GG"), ("rs1229984", "AG")]);
        let status = alcohol_tolerance(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "sensitive");
    }

    #[test]
    fn cyp2c19_star17_compensates_star2_heterozygote() {
        // rs4244285 AG (intermediate) + rs12248560 TT (ultrafast)
        let genome = genome_with(&[("rs4244285", "AG"), ("rs12248560", "TT")]);
        let status = cyp2c19_status(&findings_for(&genome)).unwrap();
        assert_eq!(status.status, "normal");
    }
}
