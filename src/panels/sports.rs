//! Sports and fitness panel: muscle fiber type, endurance, strength,
//! recovery and injury markers, with VO2max potential, the athlete
//! power/endurance profile and training recommendations.

use serde::Serialize;

use crate::types::{Finding, Genome, Section, SnpDef};

use super::{analyze_sections, PanelReport, SectionResult, SpecialSection};

pub static SECTIONS: &[Section] = &[
    Section {
        key: "muscle_fiber_type",
        name: "Тип мышечных волокон",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1815739",
                gene: "ACTN3",
                description: "Альфа-актинин-3 - ключевой белок быстрых мышечных волокон",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "power", "RR - Полноценный ACTN3. Быстрые мышечные волокна (тип II). Предрасположенность к спринту и силовым видам"),
                    ("CT", "mixed", "RX - Смешанный тип. Один функциональный аллель. Универсальные способности"),
                    ("TT", "endurance", "XX - Дефицит ACTN3. Медленные волокна (тип I). Предрасположенность к выносливости"),
                ],
            },
        ],
    },
    Section {
        key: "endurance",
        name: "Выносливость",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4253778",
                gene: "PPARA",
                description: "Регулятор метаболизма жирных кислот и энергетического обмена",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "high", "G/G - Высокая экспрессия PPARA. Эффективное окисление жиров. Хорошая выносливость"),
                    ("GC", "moderate", "G/C - Средняя активность. Умеренная способность к выносливости"),
                    ("CC", "low", "C/C - Сниженная активность PPARA. Менее эффективное использование жиров"),
                ],
            },
            SnpDef {
                rsid: "rs8192678",
                gene: "PPARGC1A (PGC-1α)",
                description: "Мастер-регулятор митохондриального биогенеза",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Gly/Gly - Высокая активность PGC-1α. Отличный митохондриальный биогенез"),
                    ("CT", "moderate", "Gly/Ser - Умеренная активность. Хороший потенциал выносливости"),
                    ("TT", "low", "Ser/Ser - Сниженная активность. Меньший адаптивный ответ к тренировкам выносливости"),
                ],
            },
            SnpDef {
                rsid: "rs2010963",
                gene: "VEGFA",
                description: "Фактор роста эндотелия сосудов - ангиогенез и кровоснабжение мышц",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "high", "G/G - Высокая экспрессия VEGF. Отличный ангиогенез и капилляризация мышц"),
                    ("GC", "moderate", "G/C - Умеренная экспрессия. Хорошее кровоснабжение"),
                    ("CC", "low", "C/C - Сниженная экспрессия VEGF. Меньший ангиогенный ответ на тренировки"),
                ],
            },
        ],
    },
    Section {
        key: "strength",
        name: "Сила и мышечная масса",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800795",
                gene: "IL-6",
                description: "Интерлейкин-6 - регулятор воспаления и мышечной адаптации",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "high", "G/G - Низкая продукция IL-6. Лучшее восстановление. Хороший силовой потенциал"),
                    ("GC", "moderate", "G/C - Умеренная продукция. Сбалансированный ответ"),
                    ("CG", "moderate", "C/G - Умеренная продукция. Сбалансированный ответ"),
                    ("CC", "low", "C/C - Высокая продукция IL-6. Больше воспаления. Медленнее восстановление"),
                ],
            },
            SnpDef {
                rsid: "rs35767",
                gene: "IGF1",
                description: "Инсулиноподобный фактор роста 1 - ключевой анаболический гормон",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "high", "C/C - Высокий уровень IGF-1. Хороший потенциал для набора мышечной массы"),
                    ("CT", "moderate", "C/T - Средний уровень IGF-1. Умеренный анаболический потенциал"),
                    ("TT", "low", "T/T - Сниженный IGF-1. Труднее набирать мышечную массу"),
                ],
            },
        ],
    },
    Section {
        key: "lactate_clearance",
        name: "Метаболизм лактата",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1049434",
                gene: "MCT1 (SLC16A1)",
                description: "Транспортёр монокарбоксилатов - вывод лактата из мышц",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("AA", "high", "A/A - Высокая активность MCT1. Быстрый клиренс лактата. Отлично для интервальных тренировок"),
                    ("AT", "moderate", "A/T - Средняя активность. Умеренный клиренс лактата"),
                    ("TT", "low", "T/T - Сниженная активность MCT1. Медленнее выводится лактат. Дольше восстановление между подходами"),
                ],
            },
        ],
    },
    Section {
        key: "recovery",
        name: "Восстановление",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs1800629",
                gene: "TNF-α",
                description: "Фактор некроза опухоли альфа - воспаление и катаболизм",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "fast", "G/G - Низкая продукция TNF-α. Быстрое восстановление. Меньше воспаления после тренировок"),
                    ("GA", "moderate", "G/A - Умеренная продукция. Среднее восстановление"),
                    ("AG", "moderate", "A/G - Умеренная продукция. Среднее восстановление"),
                    ("AA", "slow", "A/A - Высокая продукция TNF-α. Медленное восстановление. Больше мышечной боли"),
                ],
            },
            SnpDef {
                rsid: "rs4880",
                gene: "SOD2 (MnSOD)",
                description: "Супероксиддисмутаза 2 - антиоксидантная защита митохондрий",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("TT", "high", "Val/Val - Высокая активность SOD2. Отличная защита от оксидативного стресса"),
                    ("CT", "moderate", "Val/Ala - Средняя активность. Хорошая антиоксидантная защита"),
                    ("TC", "moderate", "Val/Ala - Средняя активность. Хорошая антиоксидантная защита"),
                    ("CC", "low", "Ala/Ala - Сниженная митохондриальная активность SOD2. Больше оксидативного стресса"),
                    ("AA", "high", "Val/Val - Высокая активность SOD2. Отличная защита от оксидативного стресса"),
                    ("AG", "moderate", "Val/Ala - Средняя активность. Хорошая антиоксидантная защита"),
                    ("GG", "low", "Ala/Ala - Сниженная активность SOD2. Больше оксидативного стресса"),
                ],
            },
        ],
    },
    Section {
        key: "injury_risk",
        name: "Риск травм",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs12722",
                gene: "COL5A1",
                description: "Коллаген V типа - структура сухожилий",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "low_risk", "C/C - Прочные сухожилия. Низкий риск тендинопатий"),
                    ("CT", "moderate_risk", "C/T - Средняя прочность сухожилий"),
                    ("TT", "high_risk", "T/T - Повышенная эластичность коллагена. Выше риск травм сухожилий (ахиллово, надколенника)"),
                ],
            },
            SnpDef {
                rsid: "rs1800012",
                gene: "COL1A1",
                description: "Коллаген I типа - структура связок и костей",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "low_risk", "G/G - Плотный коллаген. Низкий риск разрывов связок"),
                    ("GT", "moderate_risk", "G/T - Средняя прочность связок. Умеренный риск"),
                    ("TG", "moderate_risk", "T/G - Средняя прочность связок. Умеренный риск"),
                    ("TT", "high_risk", "T/T - Сниженная плотность коллагена. Повышен риск травм ПКС и других связок"),
                    ("CC", "low_risk", "C/C - Плотный коллаген. Низкий риск разрывов связок"),
                    ("CT", "moderate_risk", "C/T - Средняя прочность связок. Умеренный риск"),
                    ("AA", "high_risk", "A/A - Сниженная плотность коллагена. Повышен риск травм связок"),
                ],
            },
            SnpDef {
                rsid: "rs2228570",
                gene: "VDR (FokI)",
                description: "Рецептор витамина D - здоровье костей",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "low_risk", "F/F (C/C) - Активный рецептор VDR. Хорошее усвоение кальция. Крепкие кости"),
                    ("CT", "moderate_risk", "F/f (C/T) - Средняя активность VDR"),
                    ("TC", "moderate_risk", "F/f (T/C) - Средняя активность VDR"),
                    ("TT", "high_risk", "f/f (T/T) - Сниженная активность VDR. Риск низкой плотности костей. Важен витамин D"),
                ],
            },
        ],
    },
    Section {
        key: "motor_learning",
        name: "Моторное обучение",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs6265",
                gene: "BDNF",
                description: "Нейротрофический фактор мозга - нейропластичность и моторная память",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("CC", "high", "Val/Val - Высокая секреция BDNF. Быстрое освоение техники. Отличная моторная память"),
                    ("CT", "moderate", "Val/Met - Умеренная секреция. Хорошее моторное обучение"),
                    ("TC", "moderate", "Val/Met - Умеренная секреция. Хорошее моторное обучение"),
                    ("TT", "low", "Met/Met - Сниженная секреция BDNF. Медленнее освоение новых навыков. Нужно больше повторений"),
                    ("GG", "high", "Val/Val - Высокая секреция BDNF. Быстрое освоение техники"),
                    ("AG", "moderate", "Val/Met - Умеренная секреция BDNF"),
                    ("GA", "moderate", "Val/Met - Умеренная секреция BDNF"),
                    ("AA", "low", "Met/Met - Сниженная секреция BDNF. Требуется больше практики"),
                ],
            },
        ],
    },
    Section {
        key: "stress_response",
        name: "Стрессоустойчивость",
        inheritance: None,
        frequency: None,
        snps: &[
            SnpDef {
                rsid: "rs4680",
                gene: "COMT",
                description: "Катехол-О-метилтрансфераза - метаболизм дофамина",
                risk_allele: None,
                mutation: None,
                interpretations: &[
                    ("GG", "warrior", "Val/Val - 'Воин'. Быстрый метаболизм дофамина. Устойчив к стрессу. Лучше в соревнованиях под давлением"),
                    ("AG", "mixed", "Val/Met - Смешанный тип. Баланс между стрессоустойчивостью и когнитивной точностью"),
                    ("GA", "mixed", "Val/Met - Смешанный тип. Баланс между стрессоустойчивостью и когнитивной точностью"),
                    ("AA", "worrier", "Met/Met - 'Тревожный'. Медленный метаболизм. Выше тревожность под давлением, но лучше точность и планирование"),
                ],
            },
        ],
    },
];

fn section_findings<'a>(sections: &'a [SectionResult], key: &str) -> &'a [Finding] {
    sections
        .iter()
        .find(|s| s.key == key)
        .map(|s| s.findings.as_slice())
        .unwrap_or(&[])
}

/// Aerobic capacity potential built from the endurance markers
#[derive(Debug, Clone, Serialize)]
pub struct Vo2maxPotential {
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub level: &'static str,
    pub description: &'static str,
    pub markers_found: usize,
}

pub fn vo2max_potential(sections: &[SectionResult]) -> Option<Vo2maxPotential> {
    let mut score = 0u32;
    let mut max_score = 0u32;
    let mut markers_found = 0usize;

    for f in section_findings(sections, "endurance") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            markers_found += 1;
            max_score += 3;
            score += match tag {
                "high" => 3,
                "moderate" => 2,
                "low" => 1,
                _ => 0,
            };
        }
    }

    if markers_found == 0 {
        return None;
    }

    let percentage = f64::from(score) / f64::from(max_score) * 100.0;

    let (level, description) = if percentage >= 80.0 {
        (
            "Отличный",
            "Высокий генетический потенциал для развития VO2max. Хорошо откликаетесь на аэробные тренировки.",
        )
    } else if percentage >= 60.0 {
        (
            "Хороший",
            "Хороший потенциал VO2max. При правильных тренировках можно достичь высоких показателей.",
        )
    } else if percentage >= 40.0 {
        (
            "Средний",
            "Средний потенциал. Прогресс возможен, но может потребоваться больше времени.",
        )
    } else {
        (
            "Ниже среднего",
            "Генетически менее предрасположены к высоким аэробным показателям. Рекомендуется фокус на силовые виды.",
        )
    };

    Some(Vo2maxPotential {
        score,
        max_score,
        percentage,
        level,
        description,
        markers_found,
    })
}

/// Power/endurance predisposition with the derived athlete type
#[derive(Debug, Clone, Serialize)]
pub struct AthleteProfile {
    pub power_score: f64,
    pub endurance_score: f64,
    pub max_power: f64,
    pub max_endurance: f64,
    pub power_percentage: f64,
    pub endurance_percentage: f64,
    pub athlete_type: &'static str,
    pub type_name: &'static str,
    pub type_description: &'static str,
}

pub fn athlete_profile(sections: &[SectionResult]) -> AthleteProfile {
    let mut power_score = 0.0;
    let mut endurance_score = 0.0;
    let mut max_power = 0.0;
    let mut max_endurance = 0.0;

    // ACTN3 is the strongest single marker and counts toward both sides
    for f in section_findings(sections, "muscle_fiber_type") {
        if f.rsid == "rs1815739" && f.found {
            max_power += 3.0;
            max_endurance += 3.0;
            match f.tag {
                Some("power") => power_score += 3.0,
                Some("endurance") => endurance_score += 3.0,
                Some("mixed") => {
                    power_score += 1.5;
                    endurance_score += 1.5;
                }
                _ => {}
            }
        }
    }

    for f in section_findings(sections, "endurance") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            max_endurance += 2.0;
            match tag {
                "high" => endurance_score += 2.0,
                "moderate" => endurance_score += 1.0,
                _ => {}
            }
        }
    }

    for f in section_findings(sections, "strength") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            max_power += 2.0;
            match tag {
                "high" => power_score += 2.0,
                "moderate" => power_score += 1.0,
                _ => {}
            }
        }
    }

    // Lactate clearance benefits both sides, power slightly more
    for f in section_findings(sections, "lactate_clearance") {
        if let (true, Some(tag)) = (f.found, f.tag) {
            max_power += 1.0;
            max_endurance += 1.0;
            match tag {
                "high" => {
                    power_score += 1.0;
                    endurance_score += 0.5;
                }
                "moderate" => {
                    power_score += 0.5;
                    endurance_score += 0.25;
                }
                _ => {}
            }
        }
    }

    let power_percentage: f64 = if max_power > 0.0 {
        power_score / max_power * 100.0
    } else {
        50.0
    };
    let endurance_percentage = if max_endurance > 0.0 {
        endurance_score / max_endurance * 100.0
    } else {
        50.0
    };

    let diff = (power_percentage - endurance_percentage).abs();

    let (athlete_type, type_name, type_description) = if diff < 15.0 {
        (
            "mixed",
            "Универсальный атлет",
            "Сбалансированный профиль. Хорошо подходят как силовые, так и циклические виды спорта.",
        )
    } else if power_percentage > endurance_percentage {
        if diff > 30.0 {
            (
                "power",
                "Силовой/Спринтерский",
                "Выраженная предрасположенность к силовым и скоростно-силовым видам спорта.",
            )
        } else {
            (
                "power_mixed",
                "Силовой с элементами универсальности",
                "Преобладание силовых качеств с хорошей базой для других направлений.",
            )
        }
    } else if diff > 30.0 {
        (
            "endurance",
            "Выносливый",
            "Выраженная предрасположенность к циклическим видам на выносливость.",
        )
    } else {
        (
            "endurance_mixed",
            "Выносливый с элементами универсальности",
            "Преобладание выносливости с хорошей базой для силовых нагрузок.",
        )
    };

    AthleteProfile {
        power_score,
        endurance_score,
        max_power,
        max_endurance,
        power_percentage,
        endurance_percentage,
        athlete_type,
        type_name,
        type_description,
    }
}

/// One block of training advice
#[derive(Debug, Clone, Serialize)]
pub struct TrainingBlock {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub fn training_recommendations(
    profile: &AthleteProfile,
    sections: &[SectionResult],
) -> Vec<TrainingBlock> {
    let mut blocks = Vec::new();

    match profile.athlete_type {
        "power" | "power_mixed" => {
            blocks.push(TrainingBlock {
                category: "Основной фокус",
                items: &[
                    "Силовые тренировки 3-4 раза в неделю",
                    "Спринтерская работа и плиометрика",
                    "Взрывная сила и мощность",
                    "Короткие интенсивные интервалы (10-30 сек)",
                ],
            });
            blocks.push(TrainingBlock {
                category: "Рекомендуемые виды спорта",
                items: &[
                    "Тяжёлая атлетика, пауэрлифтинг",
                    "Спринт (100-400м), прыжки",
                    "Единоборства, борьба",
                    "Командные игры (футбол, баскетбол)",
                    "Кроссфит",
                ],
            });
        }
        "endurance" | "endurance_mixed" => {
            blocks.push(TrainingBlock {
                category: "Основной фокус",
                items: &[
                    "Длительные аэробные тренировки",
                    "Развитие базовой выносливости (зона 2)",
                    "Темповые тренировки на лактатном пороге",
                    "Длинные интервалы (3-8 мин)",
                ],
            });
            blocks.push(TrainingBlock {
                category: "Рекомендуемые виды спорта",
                items: &[
                    "Бег на длинные дистанции (5км - марафон)",
                    "Триатлон, велоспорт",
                    "Плавание на длинные дистанции",
                    "Лыжные гонки, биатлон",
                    "Гребля",
                ],
            });
        }
        _ => {
            blocks.push(TrainingBlock {
                category: "Основной фокус",
                items: &[
                    "Сочетание силовых и аэробных тренировок",
                    "Периодизация: блоки силы чередуются с выносливостью",
                    "Средние интервалы (1-3 мин)",
                    "Функциональный тренинг",
                ],
            });
            blocks.push(TrainingBlock {
                category: "Рекомендуемые виды спорта",
                items: &[
                    "Кроссфит и функциональный фитнес",
                    "Средние дистанции (800м - 5км)",
                    "Игровые виды спорта",
                    "Плавание",
                    "Смешанные единоборства (ММА)",
                ],
            });
        }
    }

    let slow_recovery = section_findings(sections, "recovery")
        .iter()
        .any(|f| f.found && matches!(f.tag, Some("slow") | Some("low")));

    if slow_recovery {
        blocks.push(TrainingBlock {
            category: "Восстановление (важно!)",
            items: &[
                "Увеличьте время между тяжёлыми тренировками (48-72ч)",
                "Приоритет сну (8+ часов)",
                "Противовоспалительное питание (омега-3, куркума)",
                "Регулярные массажи и миофасциальный релиз",
                "Контрастный душ и сауна",
            ],
        });
    } else {
        blocks.push(TrainingBlock {
            category: "Восстановление",
            items: &[
                "Стандартное время восстановления (24-48ч)",
                "Можно тренироваться чаще при хорошем самочувствии",
                "Следите за признаками перетренированности",
            ],
        });
    }

    let high_injury_risk = section_findings(sections, "injury_risk")
        .iter()
        .any(|f| f.found && f.tag == Some("high_risk"));

    if high_injury_risk {
        blocks.push(TrainingBlock {
            category: "Профилактика травм (приоритет!)",
            items: &[
                "Обязательная разминка 15-20 минут",
                "Эксцентрические упражнения для сухожилий",
                "Укрепление коллагена (витамин C + желатин/коллаген)",
                "Достаточный витамин D (проверьте уровень)",
                "Избегайте резкого увеличения нагрузок",
                "Работа над проприоцепцией и балансом",
            ],
        });
    }

    for f in section_findings(sections, "stress_response") {
        if f.rsid == "rs4680" && f.found {
            match f.tag {
                Some("worrier") => blocks.push(TrainingBlock {
                    category: "Психологическая подготовка",
                    items: &[
                        "Практикуйте техники релаксации перед соревнованиями",
                        "Используйте визуализацию успеха",
                        "Развивайте рутины и ритуалы для снижения тревоги",
                        "Ваше преимущество - точность и стратегическое мышление",
                    ],
                }),
                Some("warrior") => blocks.push(TrainingBlock {
                    category: "Психологическая подготовка",
                    items: &[
                        "Ваше преимущество - устойчивость под давлением",
                        "Используйте адреналин соревнований",
                        "Можете полагаться на интуицию в стрессовых ситуациях",
                    ],
                }),
                _ => {}
            }
        }
    }

    let slow_motor_learning = section_findings(sections, "motor_learning")
        .iter()
        .any(|f| f.found && f.tag == Some("low"));

    if slow_motor_learning {
        blocks.push(TrainingBlock {
            category: "Освоение техники",
            items: &[
                "Больше времени на отработку техники",
                "Разбивайте сложные движения на части",
                "Используйте видео для анализа",
                "Регулярная практика важнее интенсивности",
            ],
        });
    }

    blocks
}

pub fn run(genome: &Genome) -> PanelReport {
    let sections = analyze_sections(SECTIONS, genome);

    let mut specials = Vec::new();

    if let Some(vo2max) = vo2max_potential(&sections) {
        specials.push(SpecialSection {
            heading: "Потенциал VO2max".to_string(),
            markdown: format!(
                "- Баллы: {}/{} ({:.0}%)\n- **Уровень: {}**\n- {}",
                vo2max.score, vo2max.max_score, vo2max.percentage, vo2max.level, vo2max.description
            ),
        });
    }

    let profile = athlete_profile(&sections);
    specials.push(SpecialSection {
        heading: "Профиль атлета".to_string(),
        markdown: format!(
            "- Сила: {:.0}%\n- Выносливость: {:.0}%\n- **Тип: {}**\n- {}",
            profile.power_percentage,
            profile.endurance_percentage,
            profile.type_name,
            profile.type_description
        ),
    });

    for block in training_recommendations(&profile, &sections) {
        let mut markdown = String::new();
        for item in block.items {
            markdown.push_str(&format!("- {}\n", item));
        }
        specials.push(SpecialSection {
            heading: format!("Тренировки: {}", block.category),
            markdown,
        });
    }

    PanelReport {
        key: "sports",
        title: "Спорт и фитнес",
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
                    chromosome: "11".to_string(),
                    position: 1,
                    genotype: genotype.to_string(),
                },
            );
        }
        genome
    }

    #[test]
    fn no_markers_yields_a_balanced_default_profile() {
        let sections = analyze_sections(SECTIONS, &Genome::new());
        let profile = athlete_profile(&sections);
        assert_eq!(profile.power_percentage, 50.0);
        assert_eq!(profile.endurance_percentage, 50.0);
        assert_eq!(profile.athlete_type, "mixed");
    }

    #[test]
    fn actn3_power_homozygote_tilts_the_profile() {
        // rs1815739 CC is the authored power genotype
        let sections = analyze_sections(SECTIONS, &genome_with(&[("rs1815739", "CC")]));
        let profile = athlete_profile(&sections);
        assert_eq!(profile.power_percentage, 100.0);
        assert_eq!(profile.endurance_percentage, 0.0);
        assert_eq!(profile.athlete_type, "power");
    }

    #[test]
    fn vo2max_needs_at_least_one_endurance_marker() {
        let sections = analyze_sections(SECTIONS, &Genome::new());
        assert!(vo2max_potential(&sections).is_none());
    }

    #[test]
    fn mixed_profiles_get_the_functional_training_block() {
        let sections = analyze_sections(SECTIONS, &Genome::new());
        let profile = athlete_profile(&sections);
        let blocks = training_recommendations(&profile, &sections);
        assert!(blocks[0].items.iter().any(|i| i.contains("Сочетание")));
        // recovery advice is always present in one of its two forms
        assert!(blocks.iter().any(|b| b.category.starts_with("Восстановление")));
    }
}
