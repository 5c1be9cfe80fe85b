//! Symptom taxonomy: cancer type → associated symptoms, partitioned by the
//! sex the cancer type can occur in.
//!
//! The built-in lists are hand-curated. Symptom strings are matched exactly
//! (case and punctuation included) by the feature encoder.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::sex::Sex;

/// Which sexes a cancer type is biologically possible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SexGroup {
    MaleOnly,
    FemaleOnly,
    Both,
}

impl SexGroup {
    pub fn admits(self, sex: Sex) -> bool {
        match self {
            SexGroup::MaleOnly => sex == Sex::Male,
            SexGroup::FemaleOnly => sex == Sex::Female,
            SexGroup::Both => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancerProfile {
    pub name: String,
    pub group: SexGroup,
    pub symptoms: Vec<String>,
}

impl CancerProfile {
    pub fn new(name: &str, group: SexGroup, symptoms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            group,
            symptoms: symptoms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered collection of cancer profiles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SymptomTaxonomy {
    profiles: Vec<CancerProfile>,
}

impl SymptomTaxonomy {
    pub fn new(profiles: Vec<CancerProfile>) -> Self {
        Self { profiles }
    }

    /// The full curated taxonomy, every sex group included.
    pub fn builtin() -> Self {
        let profiles = MALE_ONLY
            .iter()
            .map(|(name, symptoms)| CancerProfile::new(name, SexGroup::MaleOnly, symptoms))
            .chain(
                FEMALE_ONLY
                    .iter()
                    .map(|(name, symptoms)| CancerProfile::new(name, SexGroup::FemaleOnly, symptoms)),
            )
            .chain(
                BOTH_SEXES
                    .iter()
                    .map(|(name, symptoms)| CancerProfile::new(name, SexGroup::Both, symptoms)),
            )
            .collect();
        Self { profiles }
    }

    /// Profiles possible for `sex`: the sex-specific group first, then the
    /// both-sex group.
    pub fn for_sex(&self, sex: Sex) -> Self {
        let specific = self
            .profiles
            .iter()
            .filter(|p| p.group != SexGroup::Both && p.group.admits(sex));
        let shared = self.profiles.iter().filter(|p| p.group == SexGroup::Both);
        Self {
            profiles: specific.chain(shared).cloned().collect(),
        }
    }

    /// Built-in male + both-sex taxonomy.
    pub fn male() -> Self {
        Self::builtin().for_sex(Sex::Male)
    }

    /// Built-in female + both-sex taxonomy.
    pub fn female() -> Self {
        Self::builtin().for_sex(Sex::Female)
    }

    pub fn profiles(&self) -> &[CancerProfile] {
        &self.profiles
    }

    pub fn get(&self, name: &str) -> Option<&CancerProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn cancer_types(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Whether the named cancer type exists and is possible for `sex`.
    pub fn compatible_with(&self, name: &str, sex: Sex) -> bool {
        self.get(name).is_some_and(|p| p.group.admits(sex))
    }

    /// Sorted, de-duplicated union of every symptom in the taxonomy.
    pub fn symptom_vocabulary(&self) -> Vec<String> {
        self.profiles
            .iter()
            .flat_map(|p| p.symptoms.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

// ── Curated symptom lists ────────────────────────────────────────────────────

type Entry = (&'static str, &'static [&'static str]);

const MALE_ONLY: &[Entry] = &[(
    "Prostate Cancer",
    &[
        "No symptoms (early stage)", "Erectile dysfunction", "Blood in urine", "Blood in semen",
        "Trouble urinating", "Frequent urination", "Weak urine stream / slow flow", "Fatigue",
        "Unexplained weight loss", "Back pain", "Bone pain (pelvis, hips, ribs, spine, head, neck)",
        "Bone fracture (from metastasis)", "Leg weakness", "Foot weakness",
        "Paralysis (from spinal cord compression)",
    ],
)];

const FEMALE_ONLY: &[Entry] = &[
    (
        "Cervical Cancer",
        &[
            "No early symptoms (often)", "Vaginal bleeding", "Bleeding after sex", "Vaginal mass",
            "Pain during sex", "Vaginal discharge", "Bleeding after douching",
            "Bleeding after pelvic exam", "Loss of appetite", "Weight loss", "Fatigue",
            "Pelvic pain", "Back pain", "Leg pain", "Swollen legs", "Heavy vaginal bleeding",
            "Bone fractures", "Urine leakage from vagina", "Feces leakage from vagina",
            "Flank pain (kidney blockage)", "Blood clots in legs", "Rectal bleeding",
            "Blood in urine",
        ],
    ),
    (
        "Uterine Cancer",
        &[
            "Abnormal vaginal bleeding", "Abnormal vaginal discharge", "Heavy menstrual bleeding",
            "Bleeding between periods", "Bleeding after menopause", "Pelvic pain",
            "Pelvic pressure",
        ],
    ),
    (
        "Vulvar Cancer",
        &[
            "Itching on vulva", "Burning sensation on vulva", "Vulvar bleeding",
            "Vulvar skin color changes (redder or whiter)", "Vulvar rash", "Vulvar warts",
            "Vulvar sores", "Vulvar lumps", "Vulvar ulcers", "Vulvar discharge", "Pelvic pain",
            "Pain during urination", "Pain during sex", "Lump on labia majora",
            "Irritation of vulva", "Bartholin gland painful lump",
        ],
    ),
];

const BOTH_SEXES: &[Entry] = &[
    (
        "Breast Cancer",
        &[
            "Lump in breast", "Breast swelling", "Breast pain", "Skin dimpling",
            "Skin thickening", "Skin redness", "Skin dryness", "Nipple pain", "Nipple inversion",
            "Nipple discharge", "Swelling of lymph nodes (underarm, collarbone)",
            "Inflammatory swelling and redness of breast",
            "Nipple/areola irritation (red, scaly)", "Bone pain (if spread)", "Bone fractures",
            "Abdominal pain (if spread to liver)", "Nausea/vomiting (liver/brain spread)",
            "Jaundice (yellow skin)", "Chest pain (lung spread)", "Shortness of breath",
            "Persistent cough", "Headache (brain spread)", "Seizures", "Vision problems",
            "Speech problems", "Memory changes", "Behavior changes",
        ],
    ),
    (
        "Basal Cell Carcinoma (BCC)",
        &[
            "Skin lesion", "Sore that doesn't heal", "Red patch", "Itching",
            "Shiny pearly skin nodule", "Red skin patch", "Skin thickening",
            "Scar-like skin changes",
        ],
    ),
    (
        "Squamous Cell Carcinoma (SCC)",
        &[
            "Skin lesion", "Crusty patch", "Ulcer", "Red bump", "Skin changes not healing",
            "Skin ulcer", "Discolored skin",
            "Mole changes (jagged edges, bigger size, color change, bleeding, texture change)",
            "Painful lesion", "Itchy lesion", "Burning lesion",
            "Large brown spot with darker speckles",
        ],
    ),
    (
        "Colorectal Cancer",
        &[
            "Blood in stool", "Change in bowel habits", "Abdominal pain", "Weight loss",
            "Constipation (worsening)", "Thin stool (narrow caliber)", "Loss of appetite",
            "Nausea", "Vomiting", "Rectal bleeding", "Anemia", "Bowel habit change",
        ],
    ),
    (
        "Primary site unknown",
        &[
            "Unexplained symptoms", "Weight loss", "Fatigue", "Pain", "Masses or lumps in body",
            "Swelling in body", "Rapid tumor growth", "Unusual metastasis sites",
            "Enlarged lymph nodes (armpit, chest, abdomen, pelvis)",
        ],
    ),
    (
        "Melanoma",
        &[
            "Dark mole", "Skin lesion", "Itching", "Change in mole size/color",
            "Multicolored mole (brown to black)", "Pink/red/fleshy mole (amelanotic)",
            "Mole changes (size, shape, color, elevation)", "New mole in adulthood",
            "Pain at mole site", "Itchy mole", "Ulcerated mole", "Redness around mole",
            "Bleeding mole", "Asymmetrical mole", "Irregular borders", "Large mole (>6mm)",
            "Mole evolving over time", "Elevated lump", "Firm lump", "Growing lump",
            "Loss of appetite (if spread)", "Nausea (if spread)", "Vomiting (if spread)",
            "Fatigue", "Brain metastases (headache, seizures, confusion)",
            "Other metastases: liver, intestines, bone, lungs, lymph nodes",
        ],
    ),
    (
        "Non-Hodgkin lymphoma",
        &[
            "Swollen lymph nodes", "Fever", "Night sweats", "Weight loss", "Fatigue",
            "Bone pain", "Chest pain", "Itchy skin", "Skin lumps (itchy, red, purple)",
            "Brain involvement: weakness, seizures, confusion, personality change",
            "Enlarged lymph nodes", "Lumps under skin",
        ],
    ),
    (
        "Lung Cancer",
        &[
            "Cough", "Chest pain", "Shortness of breath", "Weight loss", "Early: no symptoms",
            "Persistent cough (new or worsening)", "Coughing blood (streaks or large amounts)",
            "Loss of appetite", "Fatigue", "Fever", "Night sweats", "Difficulty swallowing",
            "Hoarseness (voice change)",
            "Shoulder pain (radiating down arm – Pancoast tumor)",
            "Swollen lymph nodes (above collarbone)",
            "Swelling of face/upper body (superior vena cava syndrome)",
            "Fluid around heart (arrhythmia, heart failure)",
            "Brain metastasis: headache, nausea, vomiting, seizures, confusion",
            "Bone metastasis: bone pain, fractures, spinal cord compression",
            "Liver metastasis: enlarged liver, abdominal pain, fever, jaundice",
            "Hormone syndromes: Hypercalcemia → nausea, constipation, thirst, confusion",
            "Hormone syndromes: Hyponatremia (low sodium)", "Hypokalemia (low potassium)",
            "Nail clubbing", "Joint pain, bone thickening (hypertrophic osteoarthropathy)",
            "Blood clots (migratory thrombophlebitis, heart clots, DIC)",
            "Autoimmune effects: muscle weakness, neuropathy, brain inflammation",
        ],
    ),
    (
        "Oesophagus Cancer",
        &[
            "Difficulty swallowing (solids → liquids)", "Pain when swallowing", "Weight loss",
            "Loss of appetite", "Pain behind breastbone", "Severe heartburn-like pain",
            "Hoarse/raspy cough", "Regurgitation of food", "Nausea", "Vomiting",
            "Coughing when eating/drinking", "Vomiting blood", "Aspiration pneumonia",
            "Airway obstruction", "Superior vena cava syndrome", "Hypercalcemia (high calcium)",
            "Metastasis: Liver → jaundice, abdominal swelling",
            "Metastasis: Lungs → breathing difficulty, pleural effusion",
            "Metastasis: Bone → pain, fractures",
        ],
    ),
    (
        "Bladder Cancer",
        &[
            "Blood in urine", "Frequent urination", "Painful urination", "Back pain",
            "Visible blood in urine (painless)", "Microscopic blood in urine (only in tests)",
            "No symptoms (detected by scan)", "Blocked urine flow → swollen kidneys, flank pain",
            "Bone metastasis: bone pain, fractures",
            "Lung metastasis: cough, coughing blood, breathlessness",
            "Liver metastasis: abdominal pain, swelling, jaundice, itching, weight loss",
            "Swollen lymph nodes in abdomen/groin → pain, swelling",
        ],
    ),
];
