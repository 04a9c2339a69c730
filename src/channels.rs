use once_cell::sync::Lazy;

/// Channel number to display name. Bundled configuration data, never
/// mutated at runtime. Names are sourced from the provider and some
/// slots are intentionally unnamed; they still get a playlist entry.
pub const CHANNELS: &[(u32, &str)] = &[
    (1, "ESPNNews"),
    (2, "ESPN"),
    (3, "ESPN 2"),
    (4, "ESPN U"),
    (5, "Fox Sports 1"),
    (6, "Fox Sports 2"),
    (7, "NFL Network"),
    (8, "NBA TV"),
    (9, "MLB Network"),
    (10, "NHL Network"),
    (11, "NBC Sports Network"),
    (12, "Golf Channel"),
    (13, "Tennis Channel"),
    (14, "CBS Sports Network"),
    (15, "Fight Network"),
    (16, "WWE Network"),
    (17, "Sportsnet World"),
    (18, "Sportsnet 360"),
    (19, "Sportsnet Ontario"),
    (20, "Sportsnet One"),
    (21, "TSN 1"),
    (22, "Univision Deportes"),
    (23, "ESPN Deportes"),
    (24, "Comedy Central"),
    (25, "Spike"),
    (26, "USA Network"),
    (27, "A&E"),
    (28, "TBS"),
    (29, "TNT"),
    (30, "SyFy"),
    (31, "Cartoon Network East"),
    (32, "HGTV"),
    (33, "CNN"),
    (34, "NBC East"),
    (35, "CBS East"),
    (36, "ABC East"),
    (37, "Fox East"),
    (38, "Viceland"),
    (39, "CNBC"),
    (40, "Fox News 360"),
    (41, "History Channel"),
    (42, "Discovery Channel"),
    (43, "National Geographic"),
    (44, "FX"),
    (45, "FXX"),
    (46, "BeIN USA"),
    (47, "AMC"),
    (48, "HBO East"),
    (49, "HBO Comedy"),
    (50, "HBO Signature"),
    (51, "HBO Zone"),
    (52, "Showtime East"),
    (53, "ActionMax HD East"),
    (54, "Cinemax Moremax"),
    (55, "Starz Cinema"),
    (56, "Starz East"),
    (57, "Starz Cinema"),
    (58, "Investigation America"),
    (59, "Cinemax East"),
    (60, "Cinemax 5 Star"),
    (61, ""),
    (62, ""),
    (63, "Foot Network"),
    (64, "E!"),
    (65, ""),
    (66, ""),
    (67, ""),
    (68, ""),
    (69, ""),
    (70, "US West"),
    (71, "US West"),
    (72, "US West"),
    (73, "Spectrum Sportsnet"),
    (74, "MMA TV 01"),
    (75, "AXS TV HD"),
    (76, "Sportsnet Ontario 720p"),
    (77, "Sportsnet One 720p"),
    (78, "TSN 1 720p"),
    (79, "AMC 720p"),
    (80, "HBO 720p"),
    (81, "HBO Comedy 720p"),
    (82, "HBO Signature 720p"),
    (83, "HBO Zone 720p"),
    (84, "ActionMax 720p"),
    (85, ""),
    (86, ""),
    (87, ""),
    (88, ""),
    (89, ""),
    (90, ""),
    (91, ""),
    (92, ""),
    (93, ""),
    (94, ""),
    (95, ""),
    (96, ""),
    (97, ""),
    (98, ""),
    (99, ""),
    (100, ""),
    (101, ""),
    (102, ""),
    (103, ""),
    (104, ""),
    (105, ""),
    (106, ""),
    (107, "Premier HD"),
    (108, "BT Sport 1 HD"),
    (109, "BT Sport 2 HD"),
    (110, "BT Sport 3 HD"),
    (111, "BT Sport ESPN HD"),
    (112, "Sky Sports News"),
    (113, "Sky Sports 1 UK"),
    (114, "Sky Sports 2 UK"),
    (115, "Sky Sports 3 UK"),
    (116, "Sky Sports 4 UK"),
    (117, "Sky Sports 5 UK"),
    (118, "Sky Sports F1 UK"),
    (119, "European Slot"),
    (120, "European Slot"),
];

/// Channel entries in ascending numeric order, independent of how the
/// table above is laid out.
pub static ORDERED: Lazy<Vec<(u32, &'static str)>> = Lazy::new(|| {
    let mut entries = CHANNELS.to_vec();
    entries.sort_by_key(|(num, _)| *num);
    entries
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_size() {
        assert_eq!(CHANNELS.len(), 120);
    }

    #[test]
    fn test_channel_numbers_unique() {
        let numbers: HashSet<u32> = CHANNELS.iter().map(|(num, _)| *num).collect();
        assert_eq!(numbers.len(), CHANNELS.len());
    }

    #[test]
    fn test_ordered_is_strictly_ascending() {
        for pair in ORDERED.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_empty_names_are_kept() {
        assert!(ORDERED.iter().any(|(_, name)| name.is_empty()));
        assert_eq!(ORDERED.len(), CHANNELS.len());
    }
}
