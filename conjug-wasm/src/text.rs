/// Translation lookup for the presentational glue (status line, empty-slot
/// placeholders, about modal). Pieces themselves take literal text only.
pub fn t(lang: &str, key: &str) -> &'static str {
    let fr = lang == "fr";
    match key {
        "status.empty" => {
            if fr {
                "Choisissez un radical et une terminaison"
            } else {
                "Pick a stem and an ending"
            }
        }
        "status.partial" => {
            if fr {
                "Il manque une pièce"
            } else {
                "One piece missing"
            }
        }
        "status.ready" => {
            if fr {
                "Prêt à vérifier"
            } else {
                "Ready to check"
            }
        }
        "status.correct" => {
            if fr {
                "Bravo !"
            } else {
                "Correct!"
            }
        }
        "status.wrong" => {
            if fr {
                "Essayez encore"
            } else {
                "Try again"
            }
        }
        "slot.stem" => {
            if fr {
                "radical"
            } else {
                "stem"
            }
        }
        "slot.ending" => {
            if fr {
                "terminaison"
            } else {
                "ending"
            }
        }
        _ => "",
    }
}
