use rust_decimal::Decimal;

use crate::catalog::{Catalog, ScenarioError};
use crate::models::{AccountRow, Scenario};
use crate::types::ScenarioId;

fn row(code: &str, name: &str, debit: i64, credit: i64, is_vat: bool) -> AccountRow {
    AccountRow::new(code, name, Decimal::from(debit), Decimal::from(credit), is_vat)
}

fn scenario(id: ScenarioId, name: &str, description: &str, rows: Vec<AccountRow>) -> Scenario {
    Scenario {
        id,
        name: name.to_string(),
        description: description.to_string(),
        rows
    }
}

impl Catalog {
    /// The five-scenario VAT centralization workshop.
    pub fn builtin() -> Result<Self, ScenarioError> {
        Catalog::new(vec![
            scenario(1, "Scénario 1 : Classique - TVA à Payer", "Une entreprise commerciale standard avec plus de ventes que d'achats.", vec![
                row("1000", "Capital souscrit", 0, 60000, false),
                row("2400", "Mobilier et matériel de bureau", 12000, 0, false),
                row("2409", "Amort. sur mobilier", 0, 3000, false),
                row("4000", "Clients", 28000, 0, false),
                row("4110", "TVA à récupérer sur achats", 5200, 0, true),
                row("4111", "TVA déductible intracommunautaire", 900, 0, true),
                // Credit balance on a recoverable account after a credit note correction
                row("4114", "TVA à récup. régularisation (NC)", 0, 150, true),
                row("4400", "Fournisseurs", 0, 21000, false),
                row("4510", "TVA à payer sur ventes", 0, 7800, true),
                row("4511", "TVA à payer intracommunautaire", 0, 650, true),
                row("4512", "TVA à payer import + report", 0, 430, true),
                row("4513", "TVA due sur travaux immobiliers", 0, 120, true),
                row("4530", "Précompte professionnel retenu", 0, 3100, false),
                row("5500", "Banque", 87000, 0, false),
            ]),
            scenario(2, "Scénario 2 : Investissement important - TVA à Récupérer", "L'entreprise a acheté une grosse machine ce mois-ci.", vec![
                row("1000", "Capital", 0, 100000, false),
                row("2300", "Installations techniques", 80000, 0, false),
                row("4000", "Clients", 15000, 0, false),
                row("4110", "TVA à récupérer sur achats", 2400, 0, true),
                row("4115", "TVA déductible sur investissements", 16800, 0, true),
                row("4400", "Fournisseurs", 0, 96800, false),
                row("4510", "TVA à payer sur ventes", 0, 8500, true),
                row("4513", "TVA Cocontractant (Dette)", 0, 1500, true),
                row("4118", "TVA Cocontractant (Créance)", 1500, 0, true),
                row("5500", "Banque", 25000, 0, false),
                row("6100", "Services et biens divers", 5000, 0, false),
                row("7000", "Chiffre d'affaires", 0, 40000, false),
            ]),
            scenario(3, "Scénario 3 : Balance Équilibrée (Rare)", "Un cas rare où la TVA à payer égale presque la TVA à récupérer.", vec![
                row("4000", "Clients", 12100, 0, false),
                row("4110", "TVA à récupérer sur achats", 4200, 0, true),
                row("4400", "Fournisseurs", 0, 24200, false),
                row("4510", "TVA à payer sur ventes", 0, 4200, true),
                row("6040", "Achats de marchandises", 20000, 0, false),
                row("7000", "Ventes de marchandises", 0, 20000, false),
                row("5500", "Banque", 12100, 0, false),
            ]),
            scenario(4, "Scénario 4 : Régularisations et Notes de Crédit", "Beaucoup de mouvements correctifs ce mois-ci.", vec![
                row("4000", "Clients", 5000, 0, false),
                row("4110", "TVA à récupérer sur achats", 3000, 0, true),
                // Credit notes received reduce deductible VAT
                row("4114", "TVA à récup. régul. (NC reçues)", 0, 200, true),
                row("4400", "Fournisseurs", 0, 8000, false),
                row("4510", "TVA à payer sur ventes", 0, 6000, true),
                // Credit notes sent reduce VAT owed
                row("4514", "TVA due régul. (NC envoyées)", 400, 0, true),
                row("5500", "Banque", 25000, 0, false),
                row("6000", "Achats", 15000, 0, false),
                row("7000", "Ventes", 0, 30000, false),
            ]),
            scenario(5, "Scénario 5 : Intracommunautaire pur", "Activité fortement tournée vers l'UE.", vec![
                row("4110", "TVA à récupérer (Belgique)", 1000, 0, true),
                row("4111", "TVA déductible intracom", 4500, 0, true),
                row("4510", "TVA à payer (Belgique)", 0, 2000, true),
                row("4511", "TVA à payer intracom", 0, 4500, true),
                row("4000", "Clients", 20000, 0, false),
                row("4400", "Fournisseurs", 0, 15000, false),
                row("5500", "Banque", 4000, 0, false),
            ]),
        ])
    }
}
