//! Longevity panel. Unlike the other panels its table is bilingual and
//! carries a per-genotype year weight that feeds an aggregate longevity
//! score, so it keeps its own table shape and builds its findings by hand.

use serde::Serialize;

use crate::interpret::match_genotype;
use crate::types::{Finding, Genome};

use super::combos::{apoe_lifespan_call, ApoeLifespanCall};
use super::{PanelReport, SectionResult, SpecialSection};

/// One authored longevity SNP: `(genotype, status, text, text_ru, years)`
#[derive(Debug)]
pub struct LongevitySnp {
    pub rsid: &'static str,
    pub gene: &'static str,
    pub description: &'static str,
    pub description_ru: &'static str,
    pub protective_allele: &'static str,
    pub interpretations: &'static [(&'static str, &'static str, &'static str, &'static str, f64)],
}

#[derive(Debug)]
pub struct LongevitySection {
    pub key: &'static str,
    pub name: &'static str,
    pub name_ru: &'static str,
    pub snps: &'static [LongevitySnp],
}

pub static SECTIONS: &[LongevitySection] = &[
    LongevitySection {
        key: "longevity_genes",
        name: "Longevity Genes",
        name_ru: "Гены долголетия",
        snps: &[
            LongevitySnp {
                rsid: "rs2802292",
                gene: "FOXO3",
                description: "Forkhead box O3 - Master longevity regulator",
                description_ru: "Ключевой регулятор долголетия, контролирует стресс-резистентность",
                protective_allele: "T",
                interpretations: &[
                    ("TT", "beneficial", "Longevity variant (+2.7 years)", "Вариант долголетия (+2.7 года к ожидаемой продолжительности жизни)", 2.7),
                    ("GT", "moderate", "Partial longevity benefit (+1.5 years)", "Частичный эффект долголетия (+1.5 года)", 1.5),
                    ("GG", "baseline", "Baseline lifespan", "Базовая продолжительность жизни", 0.0),
                ],
            },
            LongevitySnp {
                rsid: "rs5882",
                gene: "CETP",
                description: "Cholesteryl ester transfer protein - HDL metabolism",
                description_ru: "Белок переноса холестерина, связан с долголетием ашкенази",
                protective_allele: "G",
                interpretations: &[
                    ("GG", "beneficial", "Longevity variant - higher HDL", "Вариант долголетия - повышенный HDL холестерин", 1.5),
                    ("AG", "moderate", "Partial HDL benefit", "Умеренно повышенный HDL", 0.7),
                    ("AA", "baseline", "Standard HDL metabolism", "Стандартный метаболизм HDL", 0.0),
                ],
            },
            LongevitySnp {
                rsid: "rs9536314",
                gene: "KLOTHO (KL)",
                description: "Klotho - Anti-aging hormone, longevity factor",
                description_ru: "Антивозрастной гормон, защищает от возрастных болезней",
                protective_allele: "T",
                interpretations: &[
                    ("TT", "beneficial", "KL-VS variant - cognitive and longevity benefit", "Вариант KL-VS - защита когнитивных функций и долголетие", 1.8),
                    ("GT", "beneficial", "Heterozygote - optimal Klotho levels", "Гетерозигота - оптимальные уровни клото (лучший вариант)", 2.0),
                    ("GG", "baseline", "Standard Klotho", "Стандартные уровни клото", 0.0),
                ],
            },
        ],
    },
    LongevitySection {
        key: "apoe",
        name: "APOE Genotype",
        name_ru: "Генотип APOE",
        snps: &[
            LongevitySnp {
                rsid: "rs429358",
                gene: "APOE",
                description: "APOE C112R - determines ε4 status",
                description_ru: "APOE C112R - определяет статус ε4",
                protective_allele: "-",
                interpretations: &[
                    ("CC", "risk", "Two ε4 components", "Два компонента ε4", -3.0),
                    ("CT", "moderate", "One ε4 component", "Один компонент ε4", -1.5),
                    ("TT", "baseline", "No ε4 component", "Нет компонента ε4", 0.0),
                ],
            },
            LongevitySnp {
                rsid: "rs7412",
                gene: "APOE",
                description: "APOE R158C - determines ε2 status",
                description_ru: "APOE R158C - определяет статус ε2",
                protective_allele: "-",
                interpretations: &[
                    ("TT", "beneficial", "Two ε2 components", "Два компонента ε2 (защитный)", 2.5),
                    ("CT", "beneficial", "One ε2 component", "Один компонент ε2 (защитный)", 1.2),
                    ("CC", "baseline", "No ε2 component", "Нет компонента ε2", 0.0),
                ],
            },
        ],
    },
    LongevitySection {
        key: "telomeres",
        name: "Telomere Length",
        name_ru: "Длина теломер",
        snps: &[
            LongevitySnp {
                rsid: "rs10936599",
                gene: "TERC",
                description: "Telomerase RNA component - telomere maintenance",
                description_ru: "РНК-компонент теломеразы - поддержание теломер",
                protective_allele: "C",
                interpretations: &[
                    ("CC", "beneficial", "Longer telomeres", "Более длинные теломеры", 1.0),
                    ("CT", "moderate", "Average telomere length", "Средняя длина теломер", 0.5),
                    ("TT", "risk", "Shorter telomeres", "Укороченные теломеры", -0.5),
                ],
            },
            LongevitySnp {
                rsid: "rs2736100",
                gene: "TERT",
                description: "Telomerase reverse transcriptase - telomere extension",
                description_ru: "Обратная транскриптаза теломеразы - удлинение теломер",
                protective_allele: "C",
                interpretations: &[
                    ("CC", "beneficial", "Enhanced telomerase activity", "Повышенная активность теломеразы", 1.0),
                    ("AC", "moderate", "Average telomerase", "Средняя активность теломеразы", 0.5),
                    ("AA", "baseline", "Standard telomerase", "Стандартная активность", 0.0),
                ],
            },
        ],
    },
    LongevitySection {
        key: "oxidative_stress",
        name: "Oxidative Stress Defense",
        name_ru: "Защита от оксидативного стресса",
        snps: &[
            LongevitySnp {
                rsid: "rs4880",
                gene: "SOD2 (MnSOD)",
                description: "Superoxide dismutase 2 - mitochondrial antioxidant",
                description_ru: "Супероксиддисмутаза 2 - митохондриальный антиоксидант",
                protective_allele: "C",
                interpretations: &[
                    ("CC", "beneficial", "Better antioxidant protection (Ala/Ala)", "Лучшая антиоксидантная защита (Ala/Ala)", 1.0),
                    ("CT", "moderate", "Moderate protection (Ala/Val)", "Умеренная защита (Ala/Val)", 0.5),
                    ("AC", "moderate", "Moderate protection (Ala/Val)", "Умеренная защита (Ala/Val)", 0.5),
                    ("TT", "risk", "Lower mitochondrial protection (Val/Val)", "Сниженная митохондриальная защита (Val/Val)", -0.5),
                    ("AA", "risk", "Lower mitochondrial protection (Val/Val)", "Сниженная митохондриальная защита (Val/Val)", -0.5),
                    ("AT", "moderate", "Moderate protection (Ala/Val)", "Умеренная защита (Ala/Val)", 0.5),
                ],
            },
            LongevitySnp {
                rsid: "rs1050450",
                gene: "GPX1",
                description: "Glutathione peroxidase 1 - selenium-dependent antioxidant",
                description_ru: "Глутатионпероксидаза 1 - селен-зависимый антиоксидант",
                protective_allele: "C",
                interpretations: &[
                    ("CC", "beneficial", "Pro/Pro - optimal GPX1 activity", "Pro/Pro - оптимальная активность GPX1", 0.8),
                    ("CT", "moderate", "Pro/Leu - moderate activity", "Pro/Leu - умеренная активность", 0.4),
                    ("TT", "risk", "Leu/Leu - reduced GPX1 activity", "Leu/Leu - сниженная активность GPX1", -0.4),
                ],
            },
            LongevitySnp {
                rsid: "rs1001179",
                gene: "CAT",
                description: "Catalase - hydrogen peroxide neutralization",
                description_ru: "Каталаза - нейтрализация перекиси водорода",
                protective_allele: "C",
                interpretations: &[
                    ("CC", "beneficial", "Higher catalase activity", "Повышенная активность каталазы", 0.6),
                    ("CT", "moderate", "Average catalase", "Средняя активность каталазы", 0.3),
                    ("TT", "baseline", "Standard catalase", "Стандартная активность", 0.0),
                ],
            },
        ],
    },
    LongevitySection {
        key: "inflammation",
        name: "Inflammaging Markers",
        name_ru: "Маркеры воспалительного старения",
        snps: &[
            LongevitySnp {
                rsid: "rs1800795",
                gene: "IL-6",
                description: "Interleukin-6 - pro-inflammatory cytokine",
                description_ru: "Интерлейкин-6 - провоспалительный цитокин",
                protective_allele: "C",
                interpretations: &[
                    ("CC", "beneficial", "Lower IL-6 production - reduced inflammaging", "Низкая продукция IL-6 - меньше воспалительного старения", 1.2),
                    ("CG", "moderate", "Moderate IL-6 levels", "Умеренные уровни IL-6", 0.6),
                    ("GG", "risk", "Higher IL-6 - increased inflammaging", "Высокие уровни IL-6 - усиленное воспалительное старение", -0.8),
                ],
            },
            LongevitySnp {
                rsid: "rs1800629",
                gene: "TNF-alpha",
                description: "Tumor necrosis factor alpha - master inflammatory regulator",
                description_ru: "Фактор некроза опухолей альфа - главный регулятор воспаления",
                protective_allele: "G",
                interpretations: &[
                    ("GG", "beneficial", "Standard TNF-alpha production", "Стандартная продукция TNF-альфа", 0.5),
                    ("GA", "moderate", "Slightly elevated TNF-alpha", "Немного повышенный TNF-альфа", 0.0),
                    ("AG", "moderate", "Slightly elevated TNF-alpha", "Немного повышенный TNF-альфа", 0.0),
                    ("AA", "risk", "High TNF-alpha - chronic inflammation risk", "Высокий TNF-альфа - риск хронического воспаления", -1.0),
                ],
            },
            LongevitySnp {
                rsid: "rs1205",
                gene: "CRP",
                description: "C-reactive protein - inflammatory biomarker",
                description_ru: "С-реактивный белок - биомаркер воспаления",
                protective_allele: "T",
                interpretations: &[
                    ("TT", "beneficial", "Lower baseline CRP", "Низкий базовый уровень СРБ", 0.8),
                    ("CT", "moderate", "Average CRP levels", "Средние уровни СРБ", 0.4),
                    ("CC", "baseline", "Standard CRP", "Стандартные уровни СРБ", 0.0),
                ],
            },
        ],
    },
    LongevitySection {
        key: "dna_repair",
        name: "DNA Repair",
        name_ru: "Репарация ДНК",
        snps: &[
            LongevitySnp {
                rsid: "rs25487",
                gene: "XRCC1",
                description: "X-ray repair cross-complementing 1 - base excision repair",
                description_ru: "XRCC1 - эксцизионная репарация оснований",
                protective_allele: "G",
                interpretations: &[
                    ("GG", "beneficial", "Arg/Arg - optimal DNA repair", "Arg/Arg - оптимальная репарация ДНК", 0.8),
                    ("CC", "beneficial", "Arg/Arg - optimal DNA repair", "Arg/Arg - оптимальная репарация ДНК", 0.8),
                    ("AG", "moderate", "Arg/Gln - moderate repair capacity", "Arg/Gln - умеренная способность к репарации", 0.4),
                    ("GA", "moderate", "Arg/Gln - moderate repair capacity", "Arg/Gln - умеренная способность к репарации", 0.4),
                    ("CT", "moderate", "Arg/Gln - moderate repair capacity", "Arg/Gln - умеренная способность к репарации", 0.4),
                    ("TC", "moderate", "Arg/Gln - moderate repair capacity", "Arg/Gln - умеренная способность к репарации", 0.4),
                    ("AA", "risk", "Gln/Gln - reduced DNA repair", "Gln/Gln - сниженная репарация ДНК", -0.6),
                    ("TT", "risk", "Gln/Gln - reduced DNA repair", "Gln/Gln - сниженная репарация ДНК", -0.6),
                ],
            },
            LongevitySnp {
                rsid: "rs1052133",
                gene: "OGG1",
                description: "8-oxoguanine DNA glycosylase - oxidative DNA damage repair",
                description_ru: "OGG1 - репарация окислительных повреждений ДНК",
                protective_allele: "C",
                interpretations: &[
                    ("CC", "beneficial", "Ser/Ser - efficient repair of oxidative damage", "Ser/Ser - эффективная репарация окислительных повреждений", 0.7),
                    ("CG", "moderate", "Ser/Cys - moderate repair", "Ser/Cys - умеренная репарация", 0.3),
                    ("GG", "risk", "Cys/Cys - reduced oxidative damage repair", "Cys/Cys - сниженная репарация окислительных повреждений", -0.5),
                ],
            },
        ],
    },
    LongevitySection {
        key: "sirtuin",
        name: "Sirtuin Pathway",
        name_ru: "Сиртуиновый путь",
        snps: &[
            LongevitySnp {
                rsid: "rs3758391",
                gene: "SIRT1",
                description: "Sirtuin 1 - NAD+-dependent deacetylase, caloric restriction mimic",
                description_ru: "Сиртуин 1 - NAD+-зависимая деацетилаза, имитация калорийного ограничения",
                protective_allele: "T",
                interpretations: &[
                    ("TT", "beneficial", "Enhanced SIRT1 activity - better aging response", "Повышенная активность SIRT1 - лучший ответ на старение", 1.5),
                    ("CT", "moderate", "Moderate SIRT1 activity", "Умеренная активность SIRT1", 0.7),
                    ("CC", "baseline", "Standard SIRT1", "Стандартная активность SIRT1", 0.0),
                ],
            },
        ],
    },
    LongevitySection {
        key: "igf1_pathway",
        name: "IGF-1/Insulin Pathway",
        name_ru: "Путь IGF-1/Инсулин",
        snps: &[
            LongevitySnp {
                rsid: "rs2229765",
                gene: "IGF1R",
                description: "Insulin-like growth factor 1 receptor - growth/longevity trade-off",
                description_ru: "Рецептор инсулиноподобного фактора роста 1 - компромисс рост/долголетие",
                protective_allele: "A",
                interpretations: &[
                    ("AA", "beneficial", "Reduced IGF-1R signaling - longevity pattern", "Сниженная сигнализация IGF-1R - паттерн долголетия", 1.3),
                    ("AG", "moderate", "Moderate IGF-1R signaling", "Умеренная сигнализация IGF-1R", 0.6),
                    ("GA", "moderate", "Moderate IGF-1R signaling", "Умеренная сигнализация IGF-1R", 0.6),
                    ("GG", "baseline", "Standard IGF-1R signaling", "Стандартная сигнализация IGF-1R", 0.0),
                ],
            },
        ],
    },
];

/// Per-SNP longevity result
#[derive(Debug, Clone, Serialize)]
pub struct LongevityEntry {
    pub rsid: &'static str,
    pub gene: &'static str,
    pub description: &'static str,
    pub description_ru: &'static str,
    pub genotype: String,
    pub status: String,
    pub text: String,
    pub text_ru: String,
    pub score: f64,
    pub tested: bool,
}

/// Status counters per section
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionSummary {
    pub beneficial: usize,
    pub moderate: usize,
    pub baseline: usize,
    pub risk: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LongevitySectionResult {
    pub key: &'static str,
    pub name: &'static str,
    pub name_ru: &'static str,
    pub entries: Vec<LongevityEntry>,
    pub summary: SectionSummary,
}

pub fn analyze(genome: &Genome) -> Vec<LongevitySectionResult> {
    SECTIONS
        .iter()
        .map(|section| {
            let mut summary = SectionSummary::default();
            let entries = section
                .snps
                .iter()
                .map(|snp| {
                    let entry = analyze_snp(snp, genome);
                    match entry.status.as_str() {
                        "beneficial" => summary.beneficial += 1,
                        "moderate" => summary.moderate += 1,
                        "baseline" => summary.baseline += 1,
                        "risk" => summary.risk += 1,
                        _ => {}
                    }
                    entry
                })
                .collect();
            LongevitySectionResult {
                key: section.key,
                name: section.name,
                name_ru: section.name_ru,
                entries,
                summary,
            }
        })
        .collect()
}

fn analyze_snp(snp: &LongevitySnp, genome: &Genome) -> LongevityEntry {
    let genotype = genome
        .get(snp.rsid)
        .map(|r| r.genotype.clone())
        .unwrap_or_default();

    if genotype.is_empty() || genotype == "--" {
        return LongevityEntry {
            rsid: snp.rsid,
            gene: snp.gene,
            description: snp.description,
            description_ru: snp.description_ru,
            genotype,
            status: "not_tested".to_string(),
            text: "Not tested in this chip".to_string(),
            text_ru: "Не тестировался на этом чипе".to_string(),
            score: 0.0,
            tested: false,
        };
    }

    match match_genotype(snp.interpretations, &genotype, |e| e.0) {
        Some((_, status, en, ru, score)) => LongevityEntry {
            rsid: snp.rsid,
            gene: snp.gene,
            description: snp.description,
            description_ru: snp.description_ru,
            genotype,
            status: (*status).to_string(),
            text: (*en).to_string(),
            text_ru: (*ru).to_string(),
            score: *score,
            tested: true,
        },
        None => LongevityEntry {
            rsid: snp.rsid,
            gene: snp.gene,
            description: snp.description,
            description_ru: snp.description_ru,
            status: "unknown".to_string(),
            text: format!("Genotype {} not in database", genotype),
            text_ru: format!("Генотип {} не в базе", genotype),
            genotype,
            score: 0.0,
            tested: true,
        },
    }
}

/// Aggregate longevity score with its category breakdown
#[derive(Debug, Clone, Serialize)]
pub struct LongevityScore {
    pub total_score: f64,
    pub category_scores: Vec<(String, f64)>,
    pub percentile: f64,
    pub level: &'static str,
    pub description: &'static str,
    pub description_ru: &'static str,
}

/// Year-weights per APOE diplotype
fn apoe_score(genotype: &str) -> f64 {
    if genotype.contains("ε2/ε2") {
        2.5
    } else if genotype.contains("ε2/ε3") {
        1.5
    } else if genotype.contains("ε3/ε3") {
        0.0
    } else if genotype.contains("ε2/ε4") {
        -0.5
    } else if genotype.contains("ε3/ε4") {
        -2.0
    } else if genotype.contains("ε4/ε4") {
        -4.0
    } else {
        0.0
    }
}

fn normal_cdf(x: f64, mean: f64, std: f64) -> f64 {
    0.5 * (1.0 + libm::erf((x - mean) / (std * std::f64::consts::SQRT_2)))
}

pub fn calculate_score(results: &[LongevitySectionResult], apoe: &ApoeLifespanCall) -> LongevityScore {
    let mut total_score = 0.0;
    let mut category_scores = Vec::new();

    for section in results {
        let score: f64 = section.entries.iter().filter(|e| e.tested).map(|e| e.score).sum();
        category_scores.push((section.key.to_string(), score));
        total_score += score;
    }

    let apoe_score = apoe_score(&apoe.genotype);
    category_scores.push(("apoe".to_string(), apoe_score));
    total_score += apoe_score;

    // Rough percentile assuming scores are N(0, 5) across the population
    let percentile = normal_cdf(total_score, 0.0, 5.0) * 100.0;

    let (level, description, description_ru) = if total_score >= 8.0 {
        (
            "exceptional",
            "Exceptional longevity genetics - top tier",
            "Исключительная генетика долголетия - высший уровень",
        )
    } else if total_score >= 4.0 {
        (
            "favorable",
            "Favorable longevity profile",
            "Благоприятный профиль долголетия",
        )
    } else if total_score >= 0.0 {
        (
            "average",
            "Average longevity genetics",
            "Средняя генетика долголетия",
        )
    } else if total_score >= -4.0 {
        (
            "below_average",
            "Below average - lifestyle interventions important",
            "Ниже среднего - важны изменения образа жизни",
        )
    } else {
        (
            "challenging",
            "Challenging profile - proactive health management essential",
            "Сложный профиль - необходимо активное управление здоровьем",
        )
    };

    LongevityScore {
        total_score,
        category_scores,
        percentile,
        level,
        description,
        description_ru,
    }
}

/// One recommendation block, already localized both ways
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub category: String,
    pub category_ru: String,
    pub priority: &'static str,
    pub items: &'static [&'static str],
    pub items_ru: &'static [&'static str],
}

static OXIDATIVE_STRESS_RISK: &[&str] = &[
    "Increase antioxidant intake: Vitamin C (500-1000mg), Vitamin E (400 IU), CoQ10 (100-200mg)",
    "Consider NAC (N-Acetyl Cysteine) 600-1200mg/day for glutathione support",
    "Eat colorful vegetables rich in polyphenols",
    "Avoid excessive iron supplementation",
    "Consider astaxanthin supplementation (4-12mg/day)",
];
static OXIDATIVE_STRESS_RISK_RU: &[&str] = &[
    "Увеличьте потребление антиоксидантов: Витамин C (500-1000мг), Витамин E (400 МЕ), CoQ10 (100-200мг)",
    "Рассмотрите NAC (N-ацетилцистеин) 600-1200мг/день для поддержки глутатиона",
    "Ешьте разноцветные овощи, богатые полифенолами",
    "Избегайте избыточного приёма железа",
    "Рассмотрите астаксантин (4-12мг/день)",
];
static INFLAMMATION_RISK: &[&str] = &[
    "Follow anti-inflammatory diet (Mediterranean, low glycemic)",
    "Consider omega-3 fatty acids (EPA/DHA 2-4g/day)",
    "Curcumin with piperine (500-1000mg/day)",
    "Reduce refined carbohydrates and processed foods",
    "Regular moderate exercise (avoid overtraining)",
    "Optimize sleep (7-9 hours)",
];
static INFLAMMATION_RISK_RU: &[&str] = &[
    "Придерживайтесь противовоспалительной диеты (средиземноморская, низкогликемическая)",
    "Рассмотрите омега-3 жирные кислоты (EPA/DHA 2-4г/день)",
    "Куркумин с пиперином (500-1000мг/день)",
    "Сократите рафинированные углеводы и переработанные продукты",
    "Регулярные умеренные упражнения (избегайте перетренированности)",
    "Оптимизируйте сон (7-9 часов)",
];
static TELOMERES_RISK: &[&str] = &[
    "Prioritize stress management (meditation, yoga)",
    "Ensure adequate sleep for telomere maintenance",
    "Consider TA-65 or astragalus root extract",
    "Regular moderate exercise",
    "Avoid excessive endurance training",
    "Optimize vitamin D levels (40-60 ng/mL)",
];
static TELOMERES_RISK_RU: &[&str] = &[
    "Приоритизируйте управление стрессом (медитация, йога)",
    "Обеспечьте достаточный сон для поддержания теломер",
    "Рассмотрите TA-65 или экстракт астрагала",
    "Регулярные умеренные упражнения",
    "Избегайте чрезмерных тренировок на выносливость",
    "Оптимизируйте уровень витамина D (40-60 нг/мл)",
];
static DNA_REPAIR_RISK: &[&str] = &[
    "Ensure adequate B vitamins (especially B12, folate)",
    "Consider NMN or NR for NAD+ support (250-500mg/day)",
    "Minimize UV and radiation exposure",
    "Avoid DNA-damaging substances (tobacco, excessive alcohol)",
    "Consider sulforaphane from broccoli sprouts",
];
static DNA_REPAIR_RISK_RU: &[&str] = &[
    "Обеспечьте достаточное потребление витаминов группы B (особенно B12, фолат)",
    "Рассмотрите NMN или NR для поддержки NAD+ (250-500мг/день)",
    "Минимизируйте воздействие УФ и радиации",
    "Избегайте веществ, повреждающих ДНК (табак, избыточный алкоголь)",
    "Рассмотрите сульфорафан из ростков брокколи",
];
static SIRTUIN_BASELINE: &[&str] = &[
    "Practice intermittent fasting or time-restricted eating",
    "Consider resveratrol (250-500mg/day) or pterostilbene",
    "NMN or NR supplementation for NAD+ boost",
    "Regular exercise activates sirtuins",
    "Cold exposure (cold showers, cryotherapy)",
];
static SIRTUIN_BASELINE_RU: &[&str] = &[
    "Практикуйте интервальное голодание или ограниченное по времени питание",
    "Рассмотрите ресвератрол (250-500мг/день) или птеростильбен",
    "Добавки NMN или NR для повышения NAD+",
    "Регулярные упражнения активируют сиртуины",
    "Холодовое воздействие (холодный душ, криотерапия)",
];
static APOE_E4_RISK: &[&str] = &[
    "CRITICAL: Prioritize cardiovascular and brain health",
    "Follow strict Mediterranean or MIND diet",
    "Regular aerobic exercise (150+ min/week)",
    "Optimize sleep and treat sleep apnea",
    "Monitor and control blood pressure, glucose, cholesterol",
    "Consider DHA supplementation (1-2g/day)",
    "Avoid head injuries",
    "Engage in cognitive activities and social connections",
    "Regular cardiovascular screening",
];
static APOE_E4_RISK_RU: &[&str] = &[
    "ВАЖНО: Приоритет здоровью сердца и мозга",
    "Строго следуйте средиземноморской или MIND диете",
    "Регулярные аэробные упражнения (150+ мин/неделю)",
    "Оптимизируйте сон и лечите апноэ сна",
    "Контролируйте давление, глюкозу, холестерин",
    "Рассмотрите DHA (1-2г/день)",
    "Избегайте травм головы",
    "Занимайтесь когнитивной активностью и поддерживайте социальные связи",
    "Регулярный сердечно-сосудистый скрининг",
];
static GENERAL_LONGEVITY: &[&str] = &[
    "Caloric restriction or intermittent fasting",
    "Regular exercise combining cardio and resistance training",
    "Optimize sleep quality and circadian rhythm",
    "Stress management and social connections",
    "Regular health screenings",
    "Consider metformin or rapamycin (consult physician)",
    "Maintain healthy body weight",
    "Avoid smoking and limit alcohol",
];
static GENERAL_LONGEVITY_RU: &[&str] = &[
    "Калорийное ограничение или интервальное голодание",
    "Регулярные упражнения, сочетающие кардио и силовые",
    "Оптимизируйте качество сна и циркадный ритм",
    "Управление стрессом и социальные связи",
    "Регулярные медицинские обследования",
    "Рассмотрите метформин или рапамицин (консультация с врачом)",
    "Поддерживайте здоровый вес",
    "Избегайте курения и ограничьте алкоголь",
];

fn risk_items(key: &str) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match key {
        "oxidative_stress" => Some((OXIDATIVE_STRESS_RISK, OXIDATIVE_STRESS_RISK_RU)),
        "inflammation" => Some((INFLAMMATION_RISK, INFLAMMATION_RISK_RU)),
        "telomeres" => Some((TELOMERES_RISK, TELOMERES_RISK_RU)),
        "dna_repair" => Some((DNA_REPAIR_RISK, DNA_REPAIR_RISK_RU)),
        _ => None,
    }
}

fn baseline_items(key: &str) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match key {
        "sirtuin" => Some((SIRTUIN_BASELINE, SIRTUIN_BASELINE_RU)),
        _ => None,
    }
}

pub fn recommendations(
    results: &[LongevitySectionResult],
    apoe: &ApoeLifespanCall,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if apoe.genotype.contains("ε4") {
        recs.push(Recommendation {
            category: "APOE ε4 Carrier".to_string(),
            category_ru: "Носитель APOE ε4".to_string(),
            priority: "high",
            items: APOE_E4_RISK,
            items_ru: APOE_E4_RISK_RU,
        });
    }

    for section in results {
        let risk_count = section.summary.risk;
        if risk_count > 0 {
            if let Some((items, items_ru)) = risk_items(section.key) {
                recs.push(Recommendation {
                    category: section.name.to_string(),
                    category_ru: section.name_ru.to_string(),
                    priority: if risk_count > 1 { "high" } else { "moderate" },
                    items,
                    items_ru,
                });
            }
        } else if let Some((items, items_ru)) = baseline_items(section.key) {
            recs.push(Recommendation {
                category: section.name.to_string(),
                category_ru: section.name_ru.to_string(),
                priority: "low",
                items,
                items_ru,
            });
        }
    }

    recs.push(Recommendation {
        category: "General Longevity".to_string(),
        category_ru: "Общее долголетие".to_string(),
        priority: "moderate",
        items: GENERAL_LONGEVITY,
        items_ru: GENERAL_LONGEVITY_RU,
    });

    let priority_order = |p: &str| match p {
        "high" => 0,
        "moderate" => 1,
        "low" => 2,
        _ => 3,
    };
    recs.sort_by_key(|r| priority_order(r.priority));

    recs
}

/// Bridge a longevity entry into the common finding shape so the generic
/// report tables and the cross-panel summary can use it. Dynamic texts
/// (unknown genotypes) have no static counterpart and map to the
/// uninterpreted state.
fn to_finding(entry: &LongevityEntry, snp: &LongevitySnp, genome: &Genome) -> Finding {
    let record = genome.get(snp.rsid);
    let matched = match_genotype(snp.interpretations, &entry.genotype, |e| e.0);

    Finding {
        rsid: snp.rsid,
        gene: snp.gene,
        description: snp.description_ru,
        risk_allele: None,
        mutation: None,
        found: record.is_some(),
        chromosome: record.map(|r| r.chromosome.clone()),
        position: record.map(|r| r.position),
        genotype: record.map(|r| r.genotype.clone()),
        tag: matched.map(|e| e.1),
        text: matched.map(|e| e.3.to_string()),
    }
}

pub fn run(genome: &Genome) -> PanelReport {
    let results = analyze(genome);
    let apoe = apoe_lifespan_call(genome);
    let score = calculate_score(&results, &apoe);
    let recs = recommendations(&results, &apoe);

    let sections = SECTIONS
        .iter()
        .zip(results.iter())
        .map(|(section, result)| SectionResult {
            key: section.key,
            name: section.name_ru,
            inheritance: None,
            frequency: None,
            findings: section
                .snps
                .iter()
                .zip(result.entries.iter())
                .map(|(snp, entry)| to_finding(entry, snp, genome))
                .collect(),
        })
        .collect();

    let mut specials = Vec::new();

    specials.push(SpecialSection {
        heading: "APOE генотип".to_string(),
        markdown: format!(
            "- rs429358: {}\n- rs7412: {}\n- **APOE генотип: {}**\n- {}\n- {}",
            apoe.rs429358, apoe.rs7412, apoe.genotype, apoe.text, apoe.text_ru
        ),
    });

    let mut score_md = format!(
        "- **Longevity Score / Балл долголетия: {:+.1}**\n- Процентиль: {:.0}%\n- {}\n- {}\n\n| Категория | Балл |\n|-----------|------|",
        score.total_score, score.percentile, score.description, score.description_ru
    );
    for (key, cat_score) in &score.category_scores {
        score_md.push_str(&format!("\n| {} | {:+.1} |", key, cat_score));
    }
    specials.push(SpecialSection {
        heading: "Балл долголетия".to_string(),
        markdown: score_md,
    });

    for rec in &recs {
        let mut markdown = format!("Приоритет: **{}**\n", rec.priority);
        for (en, ru) in rec.items.iter().zip(rec.items_ru.iter()) {
            markdown.push_str(&format!("- {} / {}\n", en, ru));
        }
        specials.push(SpecialSection {
            heading: format!("Рекомендации: {} / {}", rec.category, rec.category_ru),
            markdown,
        });
    }

    PanelReport {
        key: "longevity",
        title: "Долголетие",
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
                    chromosome: "6".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn foxo3_homozygote_scores_its_authored_weight() {
        let genome = genome_with(&[("rs2802292", "TT")]);
        let results = analyze(&genome);
        let entry = results
            .iter()
            .flat_map(|s| s.entries.iter())
            .find(|e| e.rsid == "rs2802292")
            .unwrap();
        assert_eq!(entry.status, "beneficial");
        assert!((entry.score - 2.7).abs() < f64::EPSILON);
    }

    #[test]
    fn untested_snp_contributes_nothing() {
        let results = analyze(&Genome::new());
        for entry in results.iter().flat_map(|s| s.entries.iter()) {
            assert!(!entry.tested);
            assert_eq!(entry.score, 0.0);
        }
        let apoe = apoe_lifespan_call(&Genome::new());
        let score = calculate_score(&results, &apoe);
        assert_eq!(score.total_score, 0.0);
        assert!((score.percentile - 50.0).abs() < 1e-9);
        assert_eq!(score.level, "average");
    }

    #[test]
    fn unknown_genotype_is_reported_not_scored() {
        // rs2802292 table has no CC entry
        let genome = genome_with(&[("rs2802292", "CC")]);
        let results = analyze(&genome);
        let entry = results
            .iter()
            .flat_map(|s| s.entries.iter())
            .find(|e| e.rsid == "rs2802292")
            .unwrap();
        assert_eq!(entry.status, "unknown");
        assert!(entry.text.contains("not in database"));
        assert_eq!(entry.score, 0.0);
    }

    #[test]
    fn apoe_e4_homozygote_drags_score_down() {
        // rs429358 CC scores -3.0 in its own section and the ε4/ε4 call
        // adds -4.0 on top
        let genome = genome_with(&[("rs429358", "CC"), ("rs7412", "CC")]);
        let apoe = apoe_lifespan_call(&genome);
        let score = calculate_score(&analyze(&genome), &apoe);
        assert!((score.total_score - (-7.0)).abs() < f64::EPSILON);
        assert_eq!(score.level, "challenging");
    }

    #[test]
    fn e4_carriers_get_high_priority_recommendations_first() {
        let genome = genome_with(&[("rs429358", "CC"), ("rs7412", "CC")]);
        let apoe = apoe_lifespan_call(&genome);
        let recs = recommendations(&analyze(&genome), &apoe);
        assert_eq!(recs[0].priority, "high");
        assert!(recs[0].category.contains("APOE"));
        // the general block is always present
        assert!(recs.iter().any(|r| r.category == "General Longevity"));
    }

    #[test]
    fn sirtuin_baseline_advice_appears_without_risk() {
        let recs = recommendations(&analyze(&Genome::new()), &apoe_lifespan_call(&Genome::new()));
        assert!(recs.iter().any(|r| r.priority == "low" && r.category.contains("Sirtuin")));
    }

    #[test]
    fn score_tiers_follow_authored_thresholds() {
        let results = analyze(&Genome::new());
        let mut apoe = apoe_lifespan_call(&Genome::new());
        apoe.genotype = "ε2/ε2".to_string();
        let score = calculate_score(&results, &apoe);
        assert!((score.total_score - 2.5).abs() < f64::EPSILON);
        assert_eq!(score.level, "average");
    }
}
