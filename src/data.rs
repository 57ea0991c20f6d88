//! Bundled Julian Easter dataset.
//!
//! Easter Sunday dates in Julian reckoning for the years 1000-1582, one
//! `(year, month, day)` entry per year, ending at the Gregorian reform.
//! The table is read-only reference data; [`crate::JulianEasterTable`]
//! wraps it for lookup, and callers with their own historical sources can
//! inject a different dataset instead.

/// Easter Sunday `(year, month, day)` per Julian year, 1000-1582 inclusive.
pub static JULIAN_EASTER_DATES: &[(i32, u8, u8)] = &[
    (1000, 3, 31), (1001, 4, 13), (1002, 4, 5), (1003, 3, 28), (1004, 4, 16), (1005, 4, 1),
    (1006, 4, 21), (1007, 4, 6), (1008, 3, 28), (1009, 4, 17), (1010, 4, 9), (1011, 3, 25),
    (1012, 4, 13), (1013, 4, 5), (1014, 4, 25), (1015, 4, 10), (1016, 4, 1), (1017, 4, 21),
    (1018, 4, 6), (1019, 3, 29), (1020, 4, 17), (1021, 4, 2), (1022, 3, 25), (1023, 4, 14),
    (1024, 4, 5), (1025, 4, 18), (1026, 4, 10), (1027, 3, 26), (1028, 4, 14), (1029, 4, 6),
    (1030, 3, 29), (1031, 4, 11), (1032, 4, 2), (1033, 4, 22), (1034, 4, 14), (1035, 3, 30),
    (1036, 4, 18), (1037, 4, 10), (1038, 3, 26), (1039, 4, 15), (1040, 4, 6), (1041, 3, 22),
    (1042, 4, 11), (1043, 4, 3), (1044, 4, 22), (1045, 4, 7), (1046, 3, 30), (1047, 4, 19),
    (1048, 4, 3), (1049, 3, 26), (1050, 4, 15), (1051, 3, 31), (1052, 4, 19), (1053, 4, 11),
    (1054, 4, 3), (1055, 4, 16), (1056, 4, 7), (1057, 3, 30), (1058, 4, 19), (1059, 4, 4),
    (1060, 3, 26), (1061, 4, 15), (1062, 3, 31), (1063, 4, 20), (1064, 4, 11), (1065, 3, 27),
    (1066, 4, 16), (1067, 4, 8), (1068, 3, 23), (1069, 4, 12), (1070, 4, 4), (1071, 4, 24),
    (1072, 4, 8), (1073, 3, 31), (1074, 4, 20), (1075, 4, 5), (1076, 3, 27), (1077, 4, 16),
    (1078, 4, 8), (1079, 3, 24), (1080, 4, 12), (1081, 4, 4), (1082, 4, 24), (1083, 4, 9),
    (1084, 3, 31), (1085, 4, 20), (1086, 4, 5), (1087, 3, 28), (1088, 4, 16), (1089, 4, 1),
    (1090, 4, 21), (1091, 4, 13), (1092, 3, 28), (1093, 4, 17), (1094, 4, 9), (1095, 3, 25),
    (1096, 4, 13), (1097, 4, 5), (1098, 3, 28), (1099, 4, 10), (1100, 4, 1), (1101, 4, 21),
    (1102, 4, 6), (1103, 3, 29), (1104, 4, 17), (1105, 4, 9), (1106, 3, 25), (1107, 4, 14),
    (1108, 4, 5), (1109, 4, 25), (1110, 4, 10), (1111, 4, 2), (1112, 4, 21), (1113, 4, 6),
    (1114, 3, 29), (1115, 4, 18), (1116, 4, 2), (1117, 3, 25), (1118, 4, 14), (1119, 3, 30),
    (1120, 4, 18), (1121, 4, 10), (1122, 3, 26), (1123, 4, 15), (1124, 4, 6), (1125, 3, 29),
    (1126, 4, 11), (1127, 4, 3), (1128, 4, 22), (1129, 4, 14), (1130, 3, 30), (1131, 4, 19),
    (1132, 4, 10), (1133, 3, 26), (1134, 4, 15), (1135, 4, 7), (1136, 3, 22), (1137, 4, 11),
    (1138, 4, 3), (1139, 4, 23), (1140, 4, 7), (1141, 3, 30), (1142, 4, 19), (1143, 4, 4),
    (1144, 3, 26), (1145, 4, 15), (1146, 3, 31), (1147, 4, 20), (1148, 4, 11), (1149, 4, 3),
    (1150, 4, 16), (1151, 4, 8), (1152, 3, 30), (1153, 4, 19), (1154, 4, 4), (1155, 3, 27),
    (1156, 4, 15), (1157, 3, 31), (1158, 4, 20), (1159, 4, 12), (1160, 3, 27), (1161, 4, 16),
    (1162, 4, 8), (1163, 3, 24), (1164, 4, 12), (1165, 4, 4), (1166, 4, 24), (1167, 4, 9),
    (1168, 3, 31), (1169, 4, 20), (1170, 4, 5), (1171, 3, 28), (1172, 4, 16), (1173, 4, 8),
    (1174, 3, 24), (1175, 4, 13), (1176, 4, 4), (1177, 4, 24), (1178, 4, 9), (1179, 4, 1),
    (1180, 4, 20), (1181, 4, 5), (1182, 3, 28), (1183, 4, 17), (1184, 4, 1), (1185, 4, 21),
    (1186, 4, 13), (1187, 3, 29), (1188, 4, 17), (1189, 4, 9), (1190, 3, 25), (1191, 4, 14),
    (1192, 4, 5), (1193, 3, 28), (1194, 4, 10), (1195, 4, 2), (1196, 4, 21), (1197, 4, 6),
    (1198, 3, 29), (1199, 4, 18), (1200, 4, 9), (1201, 3, 25), (1202, 4, 14), (1203, 4, 6),
    (1204, 4, 25), (1205, 4, 10), (1206, 4, 2), (1207, 4, 22), (1208, 4, 6), (1209, 3, 29),
    (1210, 4, 18), (1211, 4, 3), (1212, 3, 25), (1213, 4, 14), (1214, 3, 30), (1215, 4, 19),
    (1216, 4, 10), (1217, 3, 26), (1218, 4, 15), (1219, 4, 7), (1220, 3, 29), (1221, 4, 11),
    (1222, 4, 3), (1223, 4, 23), (1224, 4, 14), (1225, 3, 30), (1226, 4, 19), (1227, 4, 11),
    (1228, 3, 26), (1229, 4, 15), (1230, 4, 7), (1231, 3, 23), (1232, 4, 11), (1233, 4, 3),
    (1234, 4, 23), (1235, 4, 8), (1236, 3, 30), (1237, 4, 19), (1238, 4, 4), (1239, 3, 27),
    (1240, 4, 15), (1241, 3, 31), (1242, 4, 20), (1243, 4, 12), (1244, 4, 3), (1245, 4, 16),
    (1246, 4, 8), (1247, 3, 31), (1248, 4, 19), (1249, 4, 4), (1250, 3, 27), (1251, 4, 16),
    (1252, 3, 31), (1253, 4, 20), (1254, 4, 12), (1255, 3, 28), (1256, 4, 16), (1257, 4, 8),
    (1258, 3, 24), (1259, 4, 13), (1260, 4, 4), (1261, 4, 24), (1262, 4, 9), (1263, 4, 1),
    (1264, 4, 20), (1265, 4, 5), (1266, 3, 28), (1267, 4, 17), (1268, 4, 8), (1269, 3, 24),
    (1270, 4, 13), (1271, 4, 5), (1272, 4, 24), (1273, 4, 9), (1274, 4, 1), (1275, 4, 14),
    (1276, 4, 5), (1277, 3, 28), (1278, 4, 17), (1279, 4, 2), (1280, 4, 21), (1281, 4, 13),
    (1282, 3, 29), (1283, 4, 18), (1284, 4, 9), (1285, 3, 25), (1286, 4, 14), (1287, 4, 6),
    (1288, 3, 28), (1289, 4, 10), (1290, 4, 2), (1291, 4, 22), (1292, 4, 6), (1293, 3, 29),
    (1294, 4, 18), (1295, 4, 3), (1296, 3, 25), (1297, 4, 14), (1298, 4, 6), (1299, 4, 19),
    (1300, 4, 10), (1301, 4, 2), (1302, 4, 22), (1303, 4, 7), (1304, 3, 29), (1305, 4, 18),
    (1306, 4, 3), (1307, 3, 26), (1308, 4, 14), (1309, 3, 30), (1310, 4, 19), (1311, 4, 11),
    (1312, 3, 26), (1313, 4, 15), (1314, 4, 7), (1315, 3, 23), (1316, 4, 11), (1317, 4, 3),
    (1318, 4, 23), (1319, 4, 8), (1320, 3, 30), (1321, 4, 19), (1322, 4, 11), (1323, 3, 27),
    (1324, 4, 15), (1325, 4, 7), (1326, 3, 23), (1327, 4, 12), (1328, 4, 3), (1329, 4, 23),
    (1330, 4, 8), (1331, 3, 31), (1332, 4, 19), (1333, 4, 4), (1334, 3, 27), (1335, 4, 16),
    (1336, 3, 31), (1337, 4, 20), (1338, 4, 12), (1339, 3, 28), (1340, 4, 16), (1341, 4, 8),
    (1342, 3, 31), (1343, 4, 13), (1344, 4, 4), (1345, 3, 27), (1346, 4, 16), (1347, 4, 1),
    (1348, 4, 20), (1349, 4, 12), (1350, 3, 28), (1351, 4, 17), (1352, 4, 8), (1353, 3, 24),
    (1354, 4, 13), (1355, 4, 5), (1356, 4, 24), (1357, 4, 9), (1358, 4, 1), (1359, 4, 21),
    (1360, 4, 5), (1361, 3, 28), (1362, 4, 17), (1363, 4, 2), (1364, 3, 24), (1365, 4, 13),
    (1366, 4, 5), (1367, 4, 18), (1368, 4, 9), (1369, 4, 1), (1370, 4, 14), (1371, 4, 6),
    (1372, 3, 28), (1373, 4, 17), (1374, 4, 2), (1375, 4, 22), (1376, 4, 13), (1377, 3, 29),
    (1378, 4, 18), (1379, 4, 10), (1380, 3, 25), (1381, 4, 14), (1382, 4, 6), (1383, 3, 22),
    (1384, 4, 10), (1385, 4, 2), (1386, 4, 22), (1387, 4, 7), (1388, 3, 29), (1389, 4, 18),
    (1390, 4, 3), (1391, 3, 26), (1392, 4, 14), (1393, 4, 6), (1394, 4, 19), (1395, 4, 11),
    (1396, 4, 2), (1397, 4, 22), (1398, 4, 7), (1399, 3, 30), (1400, 4, 18), (1401, 4, 3),
    (1402, 3, 26), (1403, 4, 15), (1404, 3, 30), (1405, 4, 19), (1406, 4, 11), (1407, 3, 27),
    (1408, 4, 15), (1409, 4, 7), (1410, 3, 23), (1411, 4, 12), (1412, 4, 3), (1413, 4, 23),
    (1414, 4, 8), (1415, 3, 31), (1416, 4, 19), (1417, 4, 11), (1418, 3, 27), (1419, 4, 16),
    (1420, 4, 7), (1421, 3, 23), (1422, 4, 12), (1423, 4, 4), (1424, 4, 23), (1425, 4, 8),
    (1426, 3, 31), (1427, 4, 20), (1428, 4, 4), (1429, 3, 27), (1430, 4, 16), (1431, 4, 1),
    (1432, 4, 20), (1433, 4, 12), (1434, 3, 28), (1435, 4, 17), (1436, 4, 8), (1437, 3, 31),
    (1438, 4, 13), (1439, 4, 5), (1440, 3, 27), (1441, 4, 16), (1442, 4, 1), (1443, 4, 21),
    (1444, 4, 12), (1445, 3, 28), (1446, 4, 17), (1447, 4, 9), (1448, 3, 24), (1449, 4, 13),
    (1450, 4, 5), (1451, 4, 25), (1452, 4, 9), (1453, 4, 1), (1454, 4, 21), (1455, 4, 6),
    (1456, 3, 28), (1457, 4, 17), (1458, 4, 2), (1459, 3, 25), (1460, 4, 13), (1461, 4, 5),
    (1462, 4, 18), (1463, 4, 10), (1464, 4, 1), (1465, 4, 14), (1466, 4, 6), (1467, 3, 29),
    (1468, 4, 17), (1469, 4, 2), (1470, 4, 22), (1471, 4, 14), (1472, 3, 29), (1473, 4, 18),
    (1474, 4, 10), (1475, 3, 26), (1476, 4, 14), (1477, 4, 6), (1478, 3, 22), (1479, 4, 11),
    (1480, 4, 2), (1481, 4, 22), (1482, 4, 7), (1483, 3, 30), (1484, 4, 18), (1485, 4, 3),
    (1486, 3, 26), (1487, 4, 15), (1488, 4, 6), (1489, 4, 19), (1490, 4, 11), (1491, 4, 3),
    (1492, 4, 22), (1493, 4, 7), (1494, 3, 30), (1495, 4, 19), (1496, 4, 3), (1497, 3, 26),
    (1498, 4, 15), (1499, 3, 31), (1500, 4, 19), (1501, 4, 11), (1502, 3, 27), (1503, 4, 16),
    (1504, 4, 7), (1505, 3, 23), (1506, 4, 12), (1507, 4, 4), (1508, 4, 23), (1509, 4, 8),
    (1510, 3, 31), (1511, 4, 20), (1512, 4, 11), (1513, 3, 27), (1514, 4, 16), (1515, 4, 8),
    (1516, 3, 23), (1517, 4, 12), (1518, 4, 4), (1519, 4, 24), (1520, 4, 8), (1521, 3, 31),
    (1522, 4, 20), (1523, 4, 5), (1524, 3, 27), (1525, 4, 16), (1526, 4, 1), (1527, 4, 21),
    (1528, 4, 12), (1529, 3, 28), (1530, 4, 17), (1531, 4, 9), (1532, 3, 31), (1533, 4, 13),
    (1534, 4, 5), (1535, 3, 28), (1536, 4, 16), (1537, 4, 1), (1538, 4, 21), (1539, 4, 6),
    (1540, 3, 28), (1541, 4, 17), (1542, 4, 9), (1543, 3, 25), (1544, 4, 13), (1545, 4, 5),
    (1546, 4, 25), (1547, 4, 10), (1548, 4, 1), (1549, 4, 21), (1550, 4, 6), (1551, 3, 29),
    (1552, 4, 17), (1553, 4, 2), (1554, 3, 25), (1555, 4, 14), (1556, 4, 5), (1557, 4, 18),
    (1558, 4, 10), (1559, 3, 26), (1560, 4, 14), (1561, 4, 6), (1562, 3, 29), (1563, 4, 11),
    (1564, 4, 2), (1565, 4, 22), (1566, 4, 14), (1567, 3, 30), (1568, 4, 18), (1569, 4, 10),
    (1570, 3, 26), (1571, 4, 15), (1572, 4, 6), (1573, 3, 22), (1574, 4, 11), (1575, 4, 3),
    (1576, 4, 22), (1577, 4, 7), (1578, 3, 30), (1579, 4, 19), (1580, 4, 3), (1581, 3, 26),
    (1582, 4, 15),
];
