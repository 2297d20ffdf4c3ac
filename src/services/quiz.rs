use serde::Serialize;
use std::collections::HashMap;

use crate::models::{baumann::NEUTRAL_SCORE, Axis, BaumannScore};

/// A quiz question tagged with the axis it informs
#[derive(Debug, Serialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub axis: Axis,
    pub question: &'static str,
    pub question_en: &'static str,
    pub answers: &'static [QuizAnswer],
}

/// Answer choice carrying its pre-assigned axis score
#[derive(Debug, Serialize)]
pub struct QuizAnswer {
    pub text: &'static str,
    pub text_en: &'static str,
    pub score: i32,
}

/// The Baumann questionnaire, in presentation order
pub const BAUMANN_QUIZ: &[QuizQuestion] = &[
    QuizQuestion {
        id: 1,
        axis: Axis::Oily,
        question: "Yüzünüzü yıkadıktan 2-3 saat sonra cildiniz nasıl hissediyor?",
        question_en: "How does your face feel 2-3 hours after washing?",
        answers: &[
            QuizAnswer { text: "Çok gergin ve kuru", text_en: "Very tight and dry", score: 10 },
            QuizAnswer { text: "Biraz kuru", text_en: "Slightly dry", score: 30 },
            QuizAnswer { text: "Normal, rahat", text_en: "Normal, comfortable", score: 50 },
            QuizAnswer { text: "T-bölgede hafif yağlı", text_en: "Slightly oily in T-zone", score: 70 },
            QuizAnswer { text: "Her yerde yağlı ve parlak", text_en: "Oily and shiny everywhere", score: 90 },
        ],
    },
    QuizQuestion {
        id: 2,
        axis: Axis::Oily,
        question: "Gözenekleriniz nasıl görünüyor?",
        question_en: "How do your pores look?",
        answers: &[
            QuizAnswer { text: "Neredeyse görünmez", text_en: "Almost invisible", score: 10 },
            QuizAnswer { text: "Küçük, sadece burunda görünür", text_en: "Small, visible only on nose", score: 40 },
            QuizAnswer { text: "Orta büyüklükte", text_en: "Medium-sized", score: 60 },
            QuizAnswer { text: "Büyük ve belirgin", text_en: "Large and visible", score: 90 },
        ],
    },
    QuizQuestion {
        id: 3,
        axis: Axis::Sensitive,
        question: "Yeni ürünlere cildiniz nasıl tepki veriyor?",
        question_en: "How does your skin react to new products?",
        answers: &[
            QuizAnswer { text: "Hiç sorun yaşamam", text_en: "Never have issues", score: 10 },
            QuizAnswer { text: "Nadiren kızarıklık olur", text_en: "Rarely get redness", score: 30 },
            QuizAnswer { text: "Bazen tahriş olur", text_en: "Sometimes get irritated", score: 60 },
            QuizAnswer { text: "Sık sık kızarır, kaşınır veya yanar", text_en: "Often get red, itchy or burning", score: 90 },
        ],
    },
    QuizQuestion {
        id: 4,
        axis: Axis::Sensitive,
        question: "Güneşte cildiniz nasıl tepki verir?",
        question_en: "How does your skin react in the sun?",
        answers: &[
            QuizAnswer { text: "Kolayca bronzlaşırım, yanmam", text_en: "Tan easily, never burn", score: 10 },
            QuizAnswer { text: "Önce hafif yanarım, sonra bronzlaşırım", text_en: "Burn slightly first, then tan", score: 40 },
            QuizAnswer { text: "Sık sık yanarım", text_en: "Burn frequently", score: 70 },
            QuizAnswer { text: "Çok kolay yanarım, bronzlaşamam", text_en: "Burn very easily, can't tan", score: 90 },
        ],
    },
    QuizQuestion {
        id: 5,
        axis: Axis::Pigmented,
        question: "Sivilce veya yaralanma sonrası cildinizde leke kalır mı?",
        question_en: "Do you get dark spots after acne or injury?",
        answers: &[
            QuizAnswer { text: "Hayır, hiç iz kalmaz", text_en: "No, no marks left", score: 10 },
            QuizAnswer { text: "Nadiren, hemen geçer", text_en: "Rarely, fades quickly", score: 30 },
            QuizAnswer { text: "Bazen, birkaç hafta sürer", text_en: "Sometimes, lasts few weeks", score: 60 },
            QuizAnswer { text: "Evet, koyu lekeler aylarca kalır", text_en: "Yes, dark spots last months", score: 90 },
        ],
    },
    QuizQuestion {
        id: 6,
        axis: Axis::Wrinkle,
        question: "Ailenizde erken yaşta kırışıklık var mı?",
        question_en: "Does your family have early wrinkles?",
        answers: &[
            QuizAnswer { text: "Hayır, ailem genç görünür", text_en: "No, family looks young", score: 10 },
            QuizAnswer { text: "Normal yaşlanma", text_en: "Normal aging", score: 40 },
            QuizAnswer { text: "Biraz erken kırışıklık", text_en: "Somewhat early wrinkles", score: 60 },
            QuizAnswer { text: "Evet, erken ve belirgin kırışıklıklar", text_en: "Yes, early prominent wrinkles", score: 90 },
        ],
    },
];

/// Scores the quiz into a base Baumann profile
///
/// `answers` maps question id to the selected answer's score. Each axis is
/// the floor average of its answered questions; an axis with no answers
/// stays at the neutral 50. Ids that are not part of the quiz are ignored,
/// and answer scores outside `[0, 100]` are clamped before averaging.
pub fn score_quiz(answers: &HashMap<u32, i32>) -> BaumannScore {
    score_answers(BAUMANN_QUIZ, answers)
}

fn score_answers(quiz: &[QuizQuestion], answers: &HashMap<u32, i32>) -> BaumannScore {
    let axis_average = |axis: Axis| {
        let scores: Vec<i32> = quiz
            .iter()
            .filter(|q| q.axis == axis)
            .filter_map(|q| answers.get(&q.id).map(|score| (*score).clamp(0, 100)))
            .collect();

        if scores.is_empty() {
            NEUTRAL_SCORE
        } else {
            scores.iter().sum::<i32>().div_euclid(scores.len() as i32)
        }
    };

    BaumannScore::new(
        axis_average(Axis::Oily),
        axis_average(Axis::Sensitive),
        axis_average(Axis::Pigmented),
        axis_average(Axis::Wrinkle),
    )
}
