//!
//! Human readable bone names.

use ahash::AHashMap;

const NAMES: &[(&str, &str)] = &[
    ("n_root", "Root"),
    ("n_hara", "Abdomen"),
    ("n_throw", "Throw"),
    ("j_kosi", "Waist"),
    ("j_sebo_a", "Lumbar"),
    ("j_sebo_b", "Thoracic"),
    ("j_sebo_c", "Cervical"),
    ("j_asi_a_l", "Left Leg"),
    ("j_asi_a_r", "Right Leg"),
    ("j_asi_b_l", "Left Knee"),
    ("j_asi_b_r", "Right Knee"),
    ("j_asi_c_l", "Left Calf"),
    ("j_asi_c_r", "Right Calf"),
    ("j_asi_d_l", "Left Foot"),
    ("j_asi_d_r", "Right Foot"),
    ("j_asi_e_l", "Left Toes"),
    ("j_asi_e_r", "Right Toes"),
    ("j_mune_l", "Left Breast"),
    ("j_mune_r", "Right Breast"),
    ("j_kubi", "Neck"),
    ("j_sako_l", "Left Clavicle"),
    ("j_sako_r", "Right Clavicle"),
    ("j_ude_a_l", "Left Arm"),
    ("j_ude_a_r", "Right Arm"),
    ("j_ude_b_l", "Left Forearm"),
    ("j_ude_b_r", "Right Forearm"),
    ("n_hkata_l", "Left Shoulder"),
    ("n_hkata_r", "Right Shoulder"),
    ("j_te_l", "Left Hand"),
    ("j_te_r", "Right Hand"),
    ("n_hhiji_l", "Left Elbow"),
    ("n_hhiji_r", "Right Elbow"),
    ("j_kao", "Head"),
    ("j_ago", "Jaw"),
    ("j_f_dmab_l", "Left Lower Eyelid"),
    ("j_f_dmab_r", "Right Lower Eyelid"),
    ("j_f_umab_l", "Left Upper Eyelid"),
    ("j_f_umab_r", "Right Upper Eyelid"),
    ("j_f_eye_l", "Left Eye"),
    ("j_f_eye_r", "Right Eye"),
    ("j_f_hana", "Nose"),
    ("j_f_hoho_l", "Left Cheek"),
    ("j_f_hoho_r", "Right Cheek"),
    ("j_f_lip_l", "Left Lips"),
    ("j_f_lip_r", "Right Lips"),
    ("j_f_mayu_l", "Left Eyebrow"),
    ("j_f_mayu_r", "Right Eyebrow"),
    ("j_f_memoto", "Bridge"),
    ("j_f_miken_l", "Left Brow"),
    ("j_f_miken_r", "Right Brow"),
    ("j_f_ulip_a", "Upper Lip A"),
    ("j_f_ulip_b", "Upper Lip B"),
    ("j_f_dlip_a", "Lower Lip A"),
    ("j_f_dlip_b", "Lower Lip B"),
    ("j_f_hige_l", "Left Whiskers"),
    ("j_f_hige_r", "Right Whiskers"),
    ("j_f_uago", "Upper Jaw"),
    ("j_f_ulip", "Upper Lip"),
    ("j_f_dlip", "Lower Lip"),
    ("n_f_lip_l", "Left Lips"),
    ("n_f_lip_r", "Right Lips"),
    ("n_f_ulip_l", "Left Upper Lip"),
    ("n_f_ulip_r", "Right Upper Lip"),
    ("j_kami_a", "Hair A"),
    ("j_kami_b", "Hair B"),
    ("j_kami_f_l", "Left Front Hair"),
    ("j_kami_f_r", "Right Front Hair"),
    ("j_ex_met_va", "Hair Extension"),
    ("j_buki_sebo_l", "Left Scabbard"),
    ("j_buki_sebo_r", "Right Scabbard"),
    ("j_buki2_kosi_l", "Left Holster"),
    ("j_buki2_kosi_r", "Right Holster"),
    ("j_buki_kosi_l", "Left Sheathe"),
    ("j_buki_kosi_r", "Right Sheathe"),
    ("n_hizasoubi_l", "Left Poleyn"),
    ("n_hizasoubi_r", "Right Poleyn"),
    ("n_kataarmor_l", "Left Pauldron"),
    ("n_kataarmor_r", "Right Pauldron"),
    ("n_buki_tate_l", "Left Shield"),
    ("n_buki_tate_r", "Right Shield"),
    ("n_hijisoubi_l", "Left Couter"),
    ("n_hijisoubi_r", "Right Couter"),
    ("n_ear_a_l", "Left Earring A"),
    ("n_ear_a_r", "Right Earring A"),
    ("n_ear_b_l", "Left Earring B"),
    ("n_ear_b_r", "Right Earring B"),
    ("n_hte_l", "Left Wrist"),
    ("n_hte_r", "Right Wrist"),
    ("j_hito_a_l", "Left Index A"),
    ("j_hito_a_r", "Right Index A"),
    ("j_hito_b_l", "Left Index B"),
    ("j_hito_b_r", "Right Index B"),
    ("j_ko_a_l", "Left Pinky A"),
    ("j_ko_a_r", "Right Pinky A"),
    ("j_ko_b_l", "Left Pinky B"),
    ("j_ko_b_r", "Right Pinky B"),
    ("j_kusu_a_l", "Left Ring A"),
    ("j_kusu_a_r", "Right Ring A"),
    ("j_kusu_b_l", "Left Ring B"),
    ("j_kusu_b_r", "Right Ring B"),
    ("j_naka_a_l", "Left Middle A"),
    ("j_naka_a_r", "Right Middle A"),
    ("j_naka_b_l", "Left Middle B"),
    ("j_naka_b_r", "Right Middle B"),
    ("j_oya_a_l", "Left Thumb A"),
    ("j_oya_a_r", "Right Thumb A"),
    ("j_oya_b_l", "Left Thumb B"),
    ("j_oya_b_r", "Right Thumb B"),
    ("n_buki_l", "Left Weapon"),
    ("n_buki_r", "Right Weapon"),
    ("n_sippo_a", "Tail A"),
    ("n_sippo_b", "Tail B"),
    ("n_sippo_c", "Tail C"),
    ("n_sippo_d", "Tail D"),
    ("n_sippo_e", "Tail E"),
    ("j_mimi_l", "Left Ear"),
    ("j_mimi_r", "Right Ear"),
];

/// Display names of bones.
#[derive(Debug)]
pub struct Locale {
    names: AHashMap<&'static str, &'static str>,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new()
    }
}

impl Locale {
    pub fn new() -> Self {
        Locale {
            names: NAMES.iter().copied().collect(),
        }
    }

    /// Unknown bones are displayed by their raw name.
    pub fn bone_name<'a>(&self, bone: &'a str) -> &'a str {
        match self.names.get(bone) {
            Some(name) => *name,
            None => bone,
        }
    }
}
